use shared_models::auth::{User, UserRole};

use crate::ids::TimestampIds;

static TEST_IDS: TimestampIds = TimestampIds::new();

/// Ready-made account records for tests.
pub struct TestUsers;

impl TestUsers {
    pub fn patient(email: &str) -> User {
        User {
            id: TEST_IDS.next_string(),
            name: "Test Patient".to_string(),
            phone: "9876543210".to_string(),
            email: email.to_string(),
            password: "pass".to_string(),
            role: UserRole::Patient,
            doctor_id: None,
            department: None,
        }
    }

    pub fn doctor(email: &str, doctor_id: &str, department: &str) -> User {
        User {
            id: TEST_IDS.next_string(),
            name: "Test Doctor".to_string(),
            phone: "9876543210".to_string(),
            email: email.to_string(),
            password: "pass".to_string(),
            role: UserRole::Doctor,
            doctor_id: Some(doctor_id.to_string()),
            department: Some(department.to_string()),
        }
    }
}
