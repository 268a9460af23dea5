pub mod models;
pub mod services;

pub use models::DoctorIdentity;
pub use services::directory;
