use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::auth::UserRole;
use shared_models::error::FieldErrors;

/// Signup form payload. `doctor_id` is only meaningful for the doctor
/// role; the account's department is derived from it, never supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub doctor_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Invalid(FieldErrors),
}
