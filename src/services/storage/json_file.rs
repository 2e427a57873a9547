use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::KeyValueStore;

/// All keys in one pretty-printed JSON object on disk.
///
/// The file is read once on open; every mutation rewrites it through a
/// sibling temp file so a crash never leaves a half-written document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = load_entries(&path)?;
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)
            .with_context(|| format!("failed to write store to {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace store at {}", self.path.display()))?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read store from {}", path.display()))?;
    if data.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    match serde_json::from_str(&data) {
        Ok(entries) => Ok(entries),
        Err(err) => {
            let aside = path.with_extension("json.corrupt");
            log::error!(
                "Store at {} is unreadable ({}); moving it to {} and starting empty",
                path.display(),
                err,
                aside.display()
            );
            fs::rename(path, &aside).with_context(|| {
                format!("failed to move corrupt store to {}", aside.display())
            })?;
            Ok(BTreeMap::new())
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.flush()
    }
}
