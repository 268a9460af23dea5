use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered account. The same record is persisted in the users
/// collection and, for the active user, as the session snapshot.
///
/// Field names serialize in camelCase so previously persisted data stays
/// readable. Passwords are stored as given; hashing is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub doctor_id: Option<String>,
    pub department: Option<String>,
}

impl User {
    pub fn is_doctor(&self) -> bool {
        self.role == UserRole::Doctor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Patient => write!(f, "patient"),
            UserRole::Doctor => write!(f, "doctor"),
        }
    }
}
