pub mod models;
pub mod services;

pub use models::{AuthError, RegisterRequest};
pub use services::account::AuthService;
