// libs/appointment-cell/src/models.rs
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use doctor_cell::DoctorIdentity;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked appointment as persisted in the appointments collection.
///
/// `id` and `created_by` are fixed at creation; everything else is
/// replaceable through an edit. Field names serialize in camelCase to stay
/// compatible with previously persisted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub doctor: String,
    pub department: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Derived date+time composite, kept for display ordering.
    pub date_time: NaiveDateTime,
    pub visit_type: VisitType,
    pub notes: String,
    pub consent: bool,
    pub status: AppointmentStatus,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitType {
    #[default]
    New,
    #[serde(rename = "Follow-up")]
    FollowUp,
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitType::New => write!(f, "New"),
            VisitType::FollowUp => write!(f, "Follow-up"),
        }
    }
}

/// Appointments are created as `Booked` and never transition afterwards;
/// canceling removes the record instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Booked,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Booked => write!(f, "Booked"),
        }
    }
}

// ==============================================================================
// BOOKING FORM PAYLOAD
// ==============================================================================

/// The booking form's payload: unpicked date/time are `None`, the email
/// field is a plain string where empty means "not given". A draft carrying
/// an `id` edits that appointment instead of booking a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub id: Option<i64>,
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub doctor: String,
    pub department: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub visit_type: VisitType,
    pub notes: String,
    pub consent: bool,
    pub created_by: Option<String>,
}

impl AppointmentDraft {
    /// Pick a doctor and derive the department from the roster, the same
    /// coupling the form applies on doctor selection.
    pub fn set_doctor(&mut self, doctor: &DoctorIdentity) {
        self.doctor = doctor.id.to_string();
        self.department = doctor.department.to_string();
    }

    /// Trim the free-text fields, as the submit handler does.
    pub fn normalized(mut self) -> Self {
        self.patient_name = self.patient_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.notes = self.notes.trim().to_string();
        self
    }

    /// Prefill a draft from an existing appointment for editing.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            id: Some(appointment.id),
            patient_name: appointment.patient_name.clone(),
            phone: appointment.phone.clone(),
            email: appointment.email.clone().unwrap_or_default(),
            doctor: appointment.doctor.clone(),
            department: appointment.department.clone(),
            date: Some(appointment.date),
            time: Some(appointment.time),
            visit_type: appointment.visit_type,
            notes: appointment.notes.clone(),
            consent: appointment.consent,
            created_by: appointment.created_by.clone(),
        }
    }

    pub fn email_given(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }

    /// Build the stored record. `None` when date or time is missing;
    /// validation rejects such drafts before they reach the store.
    pub fn into_record(
        self,
        id: i64,
        created_by: Option<String>,
        status: AppointmentStatus,
    ) -> Option<Appointment> {
        let date = self.date?;
        let time = self.time?;
        let email = self.email_given().map(str::to_string);

        Some(Appointment {
            id,
            patient_name: self.patient_name,
            phone: self.phone,
            email,
            doctor: self.doctor,
            department: self.department,
            date,
            time,
            date_time: date.and_time(time),
            visit_type: self.visit_type,
            notes: self.notes,
            consent: self.consent,
            status,
            created_by,
        })
    }
}
