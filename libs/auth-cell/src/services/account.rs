use std::sync::Arc;
use tracing::{debug, info, warn};

use doctor_cell::directory;
use shared_database::LocalStore;
use shared_models::auth::{User, UserRole};
use shared_utils::ids::TimestampIds;

use crate::models::{AuthError, RegisterRequest};
use crate::services::validation::validate_registration;

/// Collection keys match the legacy storage names so previously
/// persisted data stays readable.
pub const USERS_KEY: &str = "doctor_app_users_v1";
pub const SESSION_KEY: &str = "doctor_app_current_user_v1";

/// Registration, login, and session management over the user collection.
pub struct AuthService {
    store: Arc<LocalStore>,
    ids: TimestampIds,
}

impl AuthService {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self {
            store,
            ids: TimestampIds::new(),
        }
    }

    /// Create an account and make it the active session.
    ///
    /// Email uniqueness (case-sensitive, exact) is enforced here and only
    /// here; the collection is never deduplicated afterwards.
    pub fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        validate_registration(&request).map_err(AuthError::Invalid)?;

        let mut users = self.list_users();
        if users.iter().any(|user| user.email == request.email) {
            warn!("Registration rejected, email already in use: {}", request.email);
            return Err(AuthError::DuplicateEmail);
        }

        let (doctor_id, department) = match request.role {
            UserRole::Doctor => {
                let department = request
                    .doctor_id
                    .as_deref()
                    .and_then(directory::department_for)
                    .map(str::to_string);
                (request.doctor_id.clone(), department)
            }
            UserRole::Patient => (None, None),
        };

        let user = User {
            id: self.ids.next_string(),
            name: request.name,
            phone: request.phone,
            email: request.email,
            password: request.password,
            role: request.role,
            doctor_id,
            department,
        };

        users.push(user.clone());
        self.store.save(USERS_KEY, &users);
        self.set_session(&user);

        info!("Registered {} account {}", user.role, user.id);
        Ok(user)
    }

    /// Exact match on email and password, or `InvalidCredentials`.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .list_users()
            .into_iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or_else(|| {
                warn!("Login rejected for {}", email);
                AuthError::InvalidCredentials
            })?;

        self.set_session(&user);
        info!("Login for user {}", user.id);
        Ok(user)
    }

    pub fn logout(&self) {
        self.store.clear(SESSION_KEY);
        debug!("Session cleared");
    }

    /// The active session snapshot, if any. An unreadable session reads
    /// as logged out.
    pub fn current_user(&self) -> Option<User> {
        self.store.load_one(SESSION_KEY)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.store.load(USERS_KEY)
    }

    fn set_session(&self, user: &User) {
        self.store.save_one(SESSION_KEY, user);
    }
}
