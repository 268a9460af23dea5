use doctor_cell::directory;
use shared_models::auth::UserRole;
use shared_models::error::{FieldErrors, ValidationMode, Validator};
use shared_utils::validation::is_ten_digit_phone;

use crate::models::RegisterRequest;

/// Sequential signup checks: the first broken rule is the only one
/// reported. Appointment validation is exhaustive instead; both policies
/// are deliberate.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), FieldErrors> {
    let mut v = Validator::new(ValidationMode::FailFast);

    v.require("name", !request.name.trim().is_empty(), "Name required");
    v.require(
        "phone",
        is_ten_digit_phone(&request.phone),
        "Phone must be 10 digits",
    );
    v.require("email", request.email.contains('@'), "Valid email required");
    v.require("password", request.password.len() >= 4, "Password too short");

    if request.role == UserRole::Doctor {
        let chosen = request
            .doctor_id
            .as_deref()
            .is_some_and(directory::is_known);
        v.require("doctorId", chosen, "Select doctor identity");
    }

    v.finish()
}
