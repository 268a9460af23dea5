use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Where the durable store keeps its collection files.
pub const DEFAULT_DATA_DIR: &str = ".clinic-scheduler";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            data_dir: env::var("CLINIC_SCHEDULER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!(
                        "CLINIC_SCHEDULER_DATA_DIR not set, using default {}",
                        DEFAULT_DATA_DIR
                    );
                    PathBuf::from(DEFAULT_DATA_DIR)
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - data directory is empty");
        }

        config
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.data_dir.as_os_str().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_is_configured() {
        let config = AppConfig::with_data_dir("/tmp/clinic");
        assert!(config.is_configured());
        assert_eq!(config.data_dir, PathBuf::from("/tmp/clinic"));
    }

    #[test]
    fn empty_data_dir_is_not_configured() {
        let config = AppConfig::with_data_dir("");
        assert!(!config.is_configured());
    }
}
