// libs/appointment-cell/src/services/validation.rs
use chrono::{NaiveDate, NaiveTime, Timelike};

use shared_models::error::{FieldErrors, ValidationMode, Validator};
use shared_utils::validation::{is_ten_digit_phone, is_valid_email};

use crate::models::AppointmentDraft;

/// Booking window, in minutes since midnight: 09:00 through 17:00,
/// both ends bookable.
pub const OPENING_MINUTES: u32 = 9 * 60;
pub const CLOSING_MINUTES: u32 = 17 * 60;

pub const MAX_NOTES_CHARS: usize = 200;

fn within_business_hours(time: NaiveTime) -> bool {
    let minutes = time.hour() * 60 + time.minute();
    (OPENING_MINUTES..=CLOSING_MINUTES).contains(&minutes)
}

/// Full booking validation: every field is checked and each reports its
/// first broken rule, so the form can show all problems at once.
///
/// `today` comes from the caller; a date qualifies only when its calendar
/// day is strictly after it.
pub fn validate(draft: &AppointmentDraft, today: NaiveDate) -> Result<(), FieldErrors> {
    let mut v = Validator::new(ValidationMode::Exhaustive);

    v.require(
        "patientName",
        !draft.patient_name.trim().is_empty(),
        "Patient name is required",
    );
    v.require(
        "phone",
        is_ten_digit_phone(&draft.phone),
        "Enter a valid 10-digit phone",
    );

    if let Some(email) = draft.email_given() {
        v.require("email", is_valid_email(email), "Invalid email");
    }

    v.require("doctor", !draft.doctor.is_empty(), "Select a doctor");
    v.require(
        "department",
        !draft.department.is_empty(),
        "Select a department",
    );

    match draft.date {
        None => v.fail("date", "Select a date"),
        Some(date) if date <= today => v.fail("date", "Date must be in the future"),
        Some(_) => {}
    }

    match draft.time {
        None => v.fail("time", "Select a time"),
        Some(time) if !within_business_hours(time) => {
            v.fail("time", "Time must be between 09:00 and 17:00")
        }
        Some(_) => {}
    }

    v.require("consent", draft.consent, "You must agree to clinic policies");
    v.require(
        "notes",
        draft.notes.chars().count() <= MAX_NOTES_CHARS,
        "Max 200 characters",
    );

    v.finish()
}

/// Presence-only gate for enabling the submit action. Deliberately looser
/// than [`validate`]: no future-date, booking-window, or email-format
/// checks, so submit stays clickable and full validation still decides.
pub fn is_submittable(draft: &AppointmentDraft) -> bool {
    !draft.patient_name.trim().is_empty()
        && is_ten_digit_phone(&draft.phone)
        && !draft.doctor.is_empty()
        && !draft.department.is_empty()
        && draft.date.is_some()
        && draft.time.is_some()
        && draft.consent
}
