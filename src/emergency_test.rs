use super::*;

fn valid_request() -> EmergencyRequest {
    EmergencyRequest {
        technician_phone: "+12084039927".to_owned(),
        customer_name: "Jordan Fisher".to_owned(),
        callback_number: "+15551234567".to_owned(),
        incident_address: "412 E Main St".to_owned(),
        description: "No heat, furnace fault code 33".to_owned(),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_request_passes() {
    assert_eq!(valid_request().validate(), Ok(()));
}

#[test]
fn empty_field_is_rejected() {
    let mut request = valid_request();
    request.customer_name.clear();
    assert_eq!(request.validate(), Err(EmergencyRequestError::MissingFields));
}

#[test]
fn technician_phone_must_start_with_plus() {
    let mut request = valid_request();
    request.technician_phone = "12084039927".to_owned();
    assert_eq!(
        request.validate(),
        Err(EmergencyRequestError::TechnicianPhonePrefix)
    );
}

#[test]
fn callback_number_must_start_with_plus() {
    let mut request = valid_request();
    request.callback_number = "5551234567".to_owned();
    assert_eq!(
        request.validate(),
        Err(EmergencyRequestError::CallbackNumberPrefix)
    );
}

#[test]
fn error_messages_match_user_facing_wording() {
    assert_eq!(
        EmergencyRequestError::TechnicianPhonePrefix.to_string(),
        "Technician phone must start with + (e.g., +12084039927)"
    );
    assert_eq!(
        EmergencyRequestError::MissingFields.to_string(),
        "All fields are required"
    );
}

// =============================================================
// Form intake
// =============================================================

#[test]
fn from_form_trims_every_field() {
    let request = EmergencyRequest::from_form(
        " +1208 ",
        " Jordan ",
        " +1555 ",
        " 412 E Main St ",
        " fault code 33 ",
    );
    assert_eq!(request.technician_phone, "+1208");
    assert_eq!(request.customer_name, "Jordan");
    assert_eq!(request.callback_number, "+1555");
    assert_eq!(request.incident_address, "412 E Main St");
    assert_eq!(request.description, "fault code 33");
}

#[test]
fn whitespace_only_field_is_missing_after_trim() {
    let request = EmergencyRequest::from_form("+1208", "Jordan", "+1555", "   ", "desc");
    assert_eq!(request.validate(), Err(EmergencyRequestError::MissingFields));
}

// =============================================================
// Wire mapping
// =============================================================

#[test]
fn serializes_with_fixed_field_names() {
    let value = serde_json::to_value(valid_request()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object["chosen_phone"], "+12084039927");
    assert_eq!(object["customer_name"], "Jordan Fisher");
    assert_eq!(object["user_stated_callback_number"], "+15551234567");
    assert_eq!(object["incident_address"], "412 E Main St");
    assert_eq!(
        object["emergency_description_text"],
        "No heat, furnace fault code 33"
    );
    assert_eq!(object.len(), 5);
}

// =============================================================
// Confirmation prompt
// =============================================================

#[test]
fn confirmation_prompt_names_technician_customer_and_address() {
    let prompt = valid_request().confirmation_prompt("Tucson");
    assert!(prompt.contains("Tucson branch"));
    assert!(prompt.contains("+12084039927"));
    assert!(prompt.contains("Customer: Jordan Fisher"));
    assert!(prompt.contains("Address: 412 E Main St"));
}
