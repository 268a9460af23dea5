use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use shared_config::AppConfig;
use shared_database::LocalStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    id: i64,
    label: String,
}

fn store_in(dir: &TempDir) -> LocalStore {
    LocalStore::new(&AppConfig::with_data_dir(dir.path()))
}

fn sample_records() -> Vec<Record> {
    vec![
        Record {
            id: 2,
            label: "second".to_string(),
        },
        Record {
            id: 1,
            label: "first".to_string(),
        },
    ]
}

#[test]
fn save_then_load_round_trips_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = sample_records();
    store.save("records", &records);

    let loaded: Vec<Record> = store.load("records");
    assert_eq!(loaded, records);
}

#[test]
fn missing_collection_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let loaded: Vec<Record> = store.load("never_written");
    assert!(loaded.is_empty());
}

#[test]
fn corrupt_collection_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    std::fs::write(dir.path().join("records.json"), "{not json").unwrap();

    let loaded: Vec<Record> = store.load("records");
    assert!(loaded.is_empty());
}

#[test]
fn save_overwrites_the_whole_collection() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save("records", &sample_records());
    let shorter = vec![Record {
        id: 3,
        label: "only".to_string(),
    }];
    store.save("records", &shorter);

    let loaded: Vec<Record> = store.load("records");
    assert_eq!(loaded, shorter);
}

#[test]
fn single_record_slot_round_trips_and_clears() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.load_one::<Record>("session"), None);

    let record = Record {
        id: 9,
        label: "active".to_string(),
    };
    store.save_one("session", &record);
    assert_eq!(store.load_one::<Record>("session"), Some(record));

    store.clear("session");
    assert_eq!(store.load_one::<Record>("session"), None);

    // clearing an absent key is fine
    store.clear("session");
}

#[test]
fn no_temp_file_remains_after_save() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save("records", &sample_records());

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
}
