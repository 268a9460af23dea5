use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use appointment_cell::models::{Appointment, AppointmentDraft};
use appointment_cell::AppointmentStore;
use auth_cell::AuthService;
use shared_config::AppConfig;
use shared_database::LocalStore;
use shared_models::error::FieldErrors;

/// Process-wide application state: the durable store, the auth service,
/// and the hydrated appointment collection. Built once at startup and
/// passed into every operation explicitly - no ambient globals.
///
/// A UI shell owns exactly one of these; all its event handlers run
/// synchronously against it (single-threaded model, nothing blocks).
pub struct AppState {
    config: AppConfig,
    pub auth: AuthService,
    pub appointments: AppointmentStore,
}

impl AppState {
    /// Build the state from the durable store: hydrate the appointment
    /// collection and restore a persisted session if one exists.
    pub fn init(config: AppConfig) -> Self {
        info!(
            "Initializing application state from {}",
            config.data_dir.display()
        );

        let store = Arc::new(LocalStore::new(&config));
        let auth = AuthService::new(Arc::clone(&store));
        let appointments = AppointmentStore::load(store);

        if let Some(user) = auth.current_user() {
            debug!("Restored session for user {}", user.id);
        }

        Self {
            config,
            auth,
            appointments,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Submit the booking form on behalf of the active session. Fresh
    /// drafts get the current user stamped as creator; edits keep the
    /// original creator no matter who is logged in.
    pub fn submit_appointment(
        &mut self,
        mut draft: AppointmentDraft,
    ) -> Result<Option<Appointment>, FieldErrors> {
        if draft.id.is_none() && draft.created_by.is_none() {
            draft.created_by = self.auth.current_user().map(|user| user.id);
        }
        self.appointments.submit(draft, Self::today())
    }

    /// Appointments visible to the active session; empty when logged
    /// out (the UI keeps booking behind login anyway).
    pub fn visible_appointments(&self) -> Vec<&Appointment> {
        match self.auth.current_user() {
            Some(user) => self.appointments.list_for(&user),
            None => Vec::new(),
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
