use tracing::debug;

use crate::models::DoctorIdentity;

/// The clinic's roster. Appointments and doctor accounts reference these
/// identities by `id`.
pub static DOCTORS: [DoctorIdentity; 3] = [
    DoctorIdentity {
        id: "Dr. Rao",
        label: "Dr. Rao – Cardiology",
        department: "Cardiology",
    },
    DoctorIdentity {
        id: "Dr. Meera",
        label: "Dr. Meera – Dermatology",
        department: "Dermatology",
    },
    DoctorIdentity {
        id: "Dr. Arjun",
        label: "Dr. Arjun – Pediatrics",
        department: "Pediatrics",
    },
];

/// Departments offered for independent selection. General Medicine has no
/// dedicated doctor on the roster.
pub static DEPARTMENTS: [&str; 4] = [
    "Cardiology",
    "Dermatology",
    "Pediatrics",
    "General Medicine",
];

pub fn all() -> &'static [DoctorIdentity] {
    &DOCTORS
}

pub fn find(id: &str) -> Option<&'static DoctorIdentity> {
    let found = DOCTORS.iter().find(|doctor| doctor.id == id);
    if found.is_none() {
        debug!("No doctor identity matching {:?}", id);
    }
    found
}

pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}

pub fn department_for(id: &str) -> Option<&'static str> {
    find(id).map(|doctor| doctor.department)
}
