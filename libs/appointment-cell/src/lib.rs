pub mod models;
pub mod services;

pub use models::{Appointment, AppointmentDraft, AppointmentStatus, VisitType};
pub use services::store::AppointmentStore;
pub use services::validation;
