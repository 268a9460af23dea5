use serde::Serialize;

/// One of the clinic's fixed doctor identities. The `id` is the value
/// stored on appointments and doctor accounts; `label` is the display
/// form shown in pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoctorIdentity {
    pub id: &'static str,
    pub label: &'static str,
    pub department: &'static str,
}
