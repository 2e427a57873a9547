//! Saved palettes and the palette currently on screen.
//!
//! `PaletteService` owns its state and an injected `KeyValueStore`. The
//! whole saved list is persisted as one JSON array under
//! [`PALETTES_KEY`] after every mutation.

mod samples;

use anyhow::{Context, Result};
use chrono::Utc;
use uuid::Uuid;

use crate::models::palette::Palette;
use crate::services::storage::KeyValueStore;

pub use samples::sample_palettes;

/// Store key holding the saved palette list.
pub const PALETTES_KEY: &str = "splash720-palettes";

pub struct PaletteService<S: KeyValueStore> {
    store: S,
    saved: Vec<Palette>,
    current: Option<Palette>,
}

impl<S: KeyValueStore> PaletteService<S> {
    /// Load saved palettes from `store`.
    ///
    /// A missing or empty list, or one that no longer parses, is replaced by
    /// the sample palettes.
    pub fn load(store: S) -> Result<Self> {
        let blob = store
            .get(PALETTES_KEY)
            .context("Failed to read saved palettes")?;

        let mut service = Self {
            store,
            saved: Vec::new(),
            current: None,
        };

        match blob.as_deref().map(str::trim) {
            None | Some("") | Some("[]") => {
                log::info!("No saved palettes found; seeding sample palettes");
                service.reseed()?;
            }
            Some(data) => match serde_json::from_str::<Vec<Palette>>(data) {
                Ok(palettes) => {
                    service.saved = repair_loaded(palettes);
                    log::debug!("Loaded {} saved palettes", service.saved.len());
                }
                Err(err) => {
                    log::error!("Failed to parse saved palettes: {}", err);
                    service.reseed()?;
                }
            },
        }

        Ok(service)
    }

    fn reseed(&mut self) -> Result<()> {
        self.saved = sample_palettes();
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let data = serde_json::to_string(&self.saved).context("Failed to serialize palettes")?;
        self.store
            .set(PALETTES_KEY, &data)
            .context("Failed to persist saved palettes")
    }

    pub fn saved(&self) -> &[Palette] {
        &self.saved
    }

    pub fn current(&self) -> Option<&Palette> {
        self.current.as_ref()
    }

    pub fn set_current(&mut self, palette: Palette) {
        self.current = Some(palette);
    }

    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.saved.iter().find(|p| p.id == id)
    }

    /// Insert a new palette or replace the one with the same id.
    ///
    /// New palettes get a UUID when their id is blank and are stamped with
    /// the save time; replaced palettes get `updated_at`.
    pub fn save_palette(&mut self, mut palette: Palette) -> Result<&Palette> {
        palette
            .validate()
            .with_context(|| format!("Invalid palette {:?}", palette.name))?;

        let now = Utc::now();
        let existing = self
            .saved
            .iter()
            .position(|p| !palette.id.is_empty() && p.id == palette.id);
        let index = match existing {
            Some(index) => {
                palette.updated_at = Some(now);
                self.saved[index] = palette;
                log::info!("Updated palette {}", self.saved[index].id);
                index
            }
            None => {
                if palette.id.trim().is_empty() {
                    palette.id = Uuid::new_v4().to_string();
                }
                palette.created_at = now;
                self.saved.push(palette);
                let index = self.saved.len() - 1;
                log::info!("Saved new palette {}", self.saved[index].id);
                index
            }
        };

        if let Some(current) = self.current.as_mut() {
            if current.id == self.saved[index].id {
                *current = self.saved[index].clone();
            }
        }

        self.persist()?;
        Ok(&self.saved[index])
    }

    /// Remove a palette by id. Returns false when no palette matched.
    pub fn delete_palette(&mut self, id: &str) -> Result<bool> {
        let before = self.saved.len();
        self.saved.retain(|p| p.id != id);
        if self.saved.len() == before {
            return Ok(false);
        }
        log::info!("Deleted palette {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Case-insensitive substring match on palette names.
    pub fn search(&self, query: &str) -> Vec<&Palette> {
        let needle = query.trim().to_lowercase();
        self.saved
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Wipe every key in the store, then start over from the samples.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear().context("Failed to clear storage")?;
        self.current = None;
        log::warn!("Cleared all stored data");
        self.reseed()
    }

    /// Hand the store back, e.g. to open another service on it.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Rebuild colors whose rgb/hsl forms disagree with their hex code and drop
/// palettes that cannot be repaired.
fn repair_loaded(palettes: Vec<Palette>) -> Vec<Palette> {
    palettes
        .into_iter()
        .filter_map(|mut palette| {
            for color in &mut palette.colors {
                if color.validate().is_ok() {
                    continue;
                }
                match color.normalized() {
                    Ok(fixed) => {
                        log::warn!("Repaired color {} in palette {}", fixed.hex, palette.id);
                        *color = fixed;
                    }
                    Err(err) => {
                        log::warn!("Dropping palette {}: {}", palette.id, err);
                        return None;
                    }
                }
            }
            Some(palette)
        })
        .collect()
}
