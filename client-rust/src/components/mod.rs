//! Reusable UI components.

pub mod branch_card;
pub mod emergency_form;
pub mod recordings_panel;
pub mod timeline_panel;
