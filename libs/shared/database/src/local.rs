use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, error};

use shared_config::AppConfig;

/// The durable key-value store behind every collection: one JSON file per
/// key under the configured data directory.
///
/// Read and write failures are swallowed here - a corrupt or missing
/// collection reads as empty, a failed write is logged and dropped. No
/// storage failure ever reaches a caller.
/// Writes go through a temp file and a rename, so callers never observe a
/// partially written collection. Two processes sharing one data directory
/// are last-writer-wins; that is a documented limitation, not a bug.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            root: config.data_dir.clone(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()))
            }
        };

        let value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;

        let raw = serde_json::to_string(value).context("encoding record")?;
        let path = self.path_for(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));

        fs::write(&tmp, raw).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }

    /// Load an ordered collection. Absent or unreadable content loads as
    /// empty; corruption is logged, not surfaced.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.read_value::<Vec<T>>(key) {
            Ok(Some(records)) => {
                debug!("Loaded {} records from {}", records.len(), key);
                records
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("Failed to load collection {}: {:#}", key, err);
                Vec::new()
            }
        }
    }

    /// Overwrite an entire collection. Failures are logged and dropped.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) {
        if let Err(err) = self.write_value(key, &records) {
            error!("Failed to save collection {}: {:#}", key, err);
        }
    }

    /// Load the zero-or-one record stored under `key` (the session slot).
    pub fn load_one<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.read_value(key) {
            Ok(value) => value,
            Err(err) => {
                error!("Failed to load record {}: {:#}", key, err);
                None
            }
        }
    }

    pub fn save_one<T: Serialize>(&self, key: &str, record: &T) {
        if let Err(err) = self.write_value(key, record) {
            error!("Failed to save record {}: {:#}", key, err);
        }
    }

    /// Remove the record stored under `key`. Absent keys are fine.
    pub fn clear(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => error!("Failed to clear {}: {}", key, err),
        }
    }
}
