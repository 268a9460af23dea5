use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tempfile::TempDir;

use appointment_cell::models::{AppointmentDraft, AppointmentStatus, VisitType};
use appointment_cell::AppointmentStore;
use shared_config::AppConfig;
use shared_database::LocalStore;
use shared_utils::test_utils::TestUsers;

fn local_store(dir: &TempDir) -> Arc<LocalStore> {
    Arc::new(LocalStore::new(&AppConfig::with_data_dir(dir.path())))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 5, 19).unwrap()
}

fn draft_for(patient: &str, created_by: Option<&str>) -> AppointmentDraft {
    AppointmentDraft {
        patient_name: patient.to_string(),
        phone: "9876543210".to_string(),
        doctor: "Dr. Rao".to_string(),
        department: "Cardiology".to_string(),
        date: Some(NaiveDate::from_ymd_opt(2031, 5, 20).unwrap()),
        time: Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
        consent: true,
        created_by: created_by.map(str::to_string),
        ..AppointmentDraft::default()
    }
}

#[test]
fn create_assigns_id_and_booked_status() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let appointment = store.create(draft_for("Asha", Some("42"))).unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Booked);
    assert_eq!(appointment.patient_name, "Asha");
    assert_eq!(appointment.created_by.as_deref(), Some("42"));
    assert_eq!(store.all().len(), 1);
    assert_eq!(store.all()[0], appointment);
}

#[test]
fn newest_booking_comes_first() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let first = store.create(draft_for("First", None)).unwrap();
    let second = store.create(draft_for("Second", None)).unwrap();

    let names: Vec<_> = store.all().iter().map(|a| a.patient_name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);
    assert!(second.id > first.id);
}

#[test]
fn every_mutation_is_written_through() {
    let dir = TempDir::new().unwrap();

    let created = {
        let mut store = AppointmentStore::load(local_store(&dir));
        store.create(draft_for("Asha", Some("42"))).unwrap()
    };

    // a fresh store over the same directory sees the booking
    let mut store = AppointmentStore::load(local_store(&dir));
    assert_eq!(store.all(), &[created.clone()]);

    store.delete(created.id);
    let store = AppointmentStore::load(local_store(&dir));
    assert!(store.all().is_empty());
}

#[test]
fn update_replaces_in_place_and_keeps_identity() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let older = store.create(draft_for("Older", Some("42"))).unwrap();
    let target = store.create(draft_for("Target", Some("42"))).unwrap();
    let newer = store.create(draft_for("Newer", Some("42"))).unwrap();

    let mut edit = AppointmentDraft::from_appointment(&target);
    edit.patient_name = "Renamed".to_string();
    edit.visit_type = VisitType::FollowUp;
    // an edit cannot reassign the creator
    edit.created_by = Some("someone-else".to_string());

    let updated = store.update(target.id, edit).unwrap();

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.created_by.as_deref(), Some("42"));
    assert_eq!(updated.status, AppointmentStatus::Booked);
    assert_eq!(updated.visit_type, VisitType::FollowUp);

    let names: Vec<_> = store.all().iter().map(|a| a.patient_name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Renamed", "Older"]);
    assert_eq!(store.all()[0], newer);
    assert_eq!(store.all()[2], older);
}

#[test]
fn update_with_unknown_id_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let existing = store.create(draft_for("Asha", None)).unwrap();
    let before = store.all().to_vec();

    let outcome = store.update(existing.id + 999, draft_for("Ghost", None));

    assert!(outcome.is_none());
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let kept = store.create(draft_for("Kept", None)).unwrap();
    let gone = store.create(draft_for("Gone", None)).unwrap();

    store.delete(gone.id);
    assert_eq!(store.all(), &[kept.clone()]);

    store.delete(gone.id);
    assert_eq!(store.all(), &[kept]);
}

#[test]
fn submit_books_fresh_drafts_and_edits_identified_ones() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let booked = store
        .submit(draft_for("Asha", Some("42")), today())
        .unwrap()
        .unwrap();
    assert_eq!(booked.status, AppointmentStatus::Booked);

    let mut edit = AppointmentDraft::from_appointment(&booked);
    edit.patient_name = "  Asha Verma  ".to_string();
    let updated = store.submit(edit, today()).unwrap().unwrap();

    assert_eq!(updated.id, booked.id);
    // submit normalizes free text before validating
    assert_eq!(updated.patient_name, "Asha Verma");
    assert_eq!(store.all().len(), 1);
}

#[test]
fn submit_rejects_invalid_drafts_without_mutating() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let invalid = AppointmentDraft {
        date: Some(today()),
        ..draft_for("Asha", None)
    };

    let errors = store.submit(invalid, today()).unwrap_err();
    assert!(errors.contains("date"));
    assert!(store.all().is_empty());
}

#[test]
fn submit_edit_of_unknown_id_is_a_quiet_no_op() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let mut draft = draft_for("Ghost", None);
    draft.id = Some(12345);

    let outcome = store.submit(draft, today()).unwrap();
    assert!(outcome.is_none());
    assert!(store.all().is_empty());
}

#[test]
fn visibility_follows_roles() {
    let dir = TempDir::new().unwrap();
    let mut store = AppointmentStore::load(local_store(&dir));

    let patient_a = TestUsers::patient("a@x.com");
    let patient_b = TestUsers::patient("b@x.com");
    let rao = TestUsers::doctor("rao@x.com", "Dr. Rao", "Cardiology");
    let meera = TestUsers::doctor("meera@x.com", "Dr. Meera", "Dermatology");

    let booked = store
        .create(draft_for("Asha", Some(patient_a.id.as_str())))
        .unwrap();

    let for_a = store.list_for(&patient_a);
    assert_eq!(for_a, vec![&booked]);

    assert!(store.list_for(&patient_b).is_empty());
    assert_eq!(store.list_for(&rao), vec![&booked]);
    assert!(store.list_for(&meera).is_empty());
}

#[test]
fn hydrated_store_never_reissues_persisted_ids() {
    let dir = TempDir::new().unwrap();

    let existing = {
        let mut store = AppointmentStore::load(local_store(&dir));
        store.create(draft_for("Existing", None)).unwrap()
    };

    let mut store = AppointmentStore::load(local_store(&dir));
    let fresh = store.create(draft_for("Fresh", None)).unwrap();

    assert_ne!(fresh.id, existing.id);
}
