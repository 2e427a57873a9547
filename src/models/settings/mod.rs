// Settings module
// Application configuration loaded from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Colors per generated palette unless configured otherwise.
pub const DEFAULT_PALETTE_SIZE: usize = 5;
pub const MAX_PALETTE_SIZE: usize = 16;

/// Where saved palettes and preferences are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A single JSON document in the data directory
    #[default]
    Json,
    /// A SQLite key-value table in the data directory
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageBackend,
    /// Overrides the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub palette_size: usize,
    /// Fixed RNG seed for reproducible generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Json,
            data_dir: None,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_PALETTE_SIZE).contains(&self.palette_size) {
            return Err(format!(
                "palette_size must be between 1 and {}, got {}",
                MAX_PALETTE_SIZE, self.palette_size
            ));
        }
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err("data_dir must not be empty".to_string());
            }
        }
        Ok(())
    }
}
