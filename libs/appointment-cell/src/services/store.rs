// libs/appointment-cell/src/services/store.rs
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use shared_database::LocalStore;
use shared_models::auth::{User, UserRole};
use shared_models::error::FieldErrors;
use shared_utils::ids::TimestampIds;

use crate::models::{Appointment, AppointmentDraft, AppointmentStatus};
use crate::services::validation;

/// Collection key matches the legacy storage name so previously
/// persisted appointments stay readable.
pub const APPOINTMENTS_KEY: &str = "doctor_app_appointments_v1";

/// The in-memory appointment collection, most-recent-first, written
/// through to the durable store after every mutation.
pub struct AppointmentStore {
    store: Arc<LocalStore>,
    appointments: Vec<Appointment>,
    ids: TimestampIds,
}

impl AppointmentStore {
    /// Hydrate from the durable store. Ids already present in the data
    /// are observed so new bookings never collide with them.
    pub fn load(store: Arc<LocalStore>) -> Self {
        let appointments: Vec<Appointment> = store.load(APPOINTMENTS_KEY);
        debug!("Hydrated {} appointment(s)", appointments.len());

        let ids = TimestampIds::new();
        for appointment in &appointments {
            ids.observe(appointment.id);
        }

        Self {
            store,
            appointments,
            ids,
        }
    }

    /// The validated entry point behind the booking form: normalize,
    /// run full validation, then book or edit depending on whether the
    /// draft carries an id.
    ///
    /// `Ok(None)` is the preserved edit-of-unknown-id no-op.
    pub fn submit(
        &mut self,
        draft: AppointmentDraft,
        today: NaiveDate,
    ) -> Result<Option<Appointment>, FieldErrors> {
        let draft = draft.normalized();
        if let Err(errors) = validation::validate(&draft, today) {
            warn!("Booking rejected with {} field error(s)", errors.len());
            return Err(errors);
        }

        Ok(match draft.id {
            Some(id) => self.update(id, draft),
            None => self.create(draft),
        })
    }

    /// Book a fresh appointment: assign a new time-based id and `Booked`
    /// status, prepend (the list reads most-recent-first), persist.
    ///
    /// Returns `None` only for a draft with no date or time picked;
    /// validated drafts always produce a record.
    pub fn create(&mut self, draft: AppointmentDraft) -> Option<Appointment> {
        let created_by = draft.created_by.clone();
        let appointment =
            draft.into_record(self.ids.next(), created_by, AppointmentStatus::Booked)?;

        self.appointments.insert(0, appointment.clone());
        self.persist();
        info!("Booked appointment {}", appointment.id);
        Some(appointment)
    }

    /// Replace the appointment matching `id` in place, keeping its
    /// position, `created_by`, and `status`. An unknown id is a silent
    /// no-op - preserved behavior, not an oversight to fix here.
    pub fn update(&mut self, id: i64, draft: AppointmentDraft) -> Option<Appointment> {
        let Some(index) = self.appointments.iter().position(|a| a.id == id) else {
            debug!("Update for unknown appointment {} ignored", id);
            return None;
        };

        let existing = &self.appointments[index];
        let replacement =
            draft.into_record(id, existing.created_by.clone(), existing.status)?;

        self.appointments[index] = replacement.clone();
        self.persist();
        info!("Updated appointment {}", id);
        Some(replacement)
    }

    /// Remove the appointment matching `id`. Absent ids are fine;
    /// deleting twice equals deleting once.
    pub fn delete(&mut self, id: i64) {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);

        if self.appointments.len() != before {
            self.persist();
            info!("Canceled appointment {}", id);
        }
    }

    /// The appointments visible to `user`: patients see what they
    /// created, doctors see what is booked against their identity.
    /// Insertion order (most-recent-created first) is preserved.
    pub fn list_for(&self, user: &User) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| match user.role {
                UserRole::Patient => a.created_by.as_deref() == Some(user.id.as_str()),
                UserRole::Doctor => user.doctor_id.as_deref() == Some(a.doctor.as_str()),
            })
            .collect()
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    fn persist(&self) {
        self.store.save(APPOINTMENTS_KEY, &self.appointments);
    }
}
