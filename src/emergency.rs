//! Emergency request record and validation.

#[cfg(test)]
#[path = "emergency_test.rs"]
mod emergency_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single emergency submission. Serializes with the dispatch service's
/// fixed field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyRequest {
    #[serde(rename = "chosen_phone")]
    pub technician_phone: String,
    pub customer_name: String,
    #[serde(rename = "user_stated_callback_number")]
    pub callback_number: String,
    pub incident_address: String,
    #[serde(rename = "emergency_description_text")]
    pub description: String,
}

/// Validation failures, worded as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmergencyRequestError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Technician phone must start with + (e.g., +12084039927)")]
    TechnicianPhonePrefix,
    #[error("Callback number must start with + (e.g., +15551234567)")]
    CallbackNumberPrefix,
}

impl EmergencyRequest {
    /// Build a request from raw form values, trimming each field.
    pub fn from_form(
        technician_phone: &str,
        customer_name: &str,
        callback_number: &str,
        incident_address: &str,
        description: &str,
    ) -> Self {
        Self {
            technician_phone: technician_phone.trim().to_owned(),
            customer_name: customer_name.trim().to_owned(),
            callback_number: callback_number.trim().to_owned(),
            incident_address: incident_address.trim().to_owned(),
            description: description.trim().to_owned(),
        }
    }

    /// Presence plus `+`-prefix checks on the two phone-like fields. No
    /// network call may be issued when this fails.
    pub fn validate(&self) -> Result<(), EmergencyRequestError> {
        let fields = [
            &self.technician_phone,
            &self.customer_name,
            &self.callback_number,
            &self.incident_address,
            &self.description,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(EmergencyRequestError::MissingFields);
        }
        if !self.technician_phone.starts_with('+') {
            return Err(EmergencyRequestError::TechnicianPhonePrefix);
        }
        if !self.callback_number.starts_with('+') {
            return Err(EmergencyRequestError::CallbackNumberPrefix);
        }
        Ok(())
    }

    /// The single confirmation prompt shown before triggering.
    pub fn confirmation_prompt(&self, branch_name: &str) -> String {
        format!(
            "TRIGGER EMERGENCY: Are you sure you want to trigger an emergency on {branch_name} branch?\n\nTechnician {} will be notified via SMS and call.\n\nCustomer: {}\nAddress: {}\n\nAn SMS notification will be sent to the administrator.",
            self.technician_phone, self.customer_name, self.incident_address
        )
    }
}
