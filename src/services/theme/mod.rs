// Theme service
// Reads and writes the visual theme preferences through the key-value store

use anyhow::{Context, Result};

use crate::models::theme::{GlassLevel, ThemeName};
use crate::services::storage::KeyValueStore;

pub const THEME_KEY: &str = "splash720-theme";
pub const GLASS_KEY: &str = "splash720-glassmorphism";

pub struct ThemeService<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> ThemeService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Stored theme, or the default when unset or unrecognised.
    pub fn theme(&self) -> Result<ThemeName> {
        self.read(THEME_KEY)
    }

    pub fn glass_level(&self) -> Result<GlassLevel> {
        self.read(GLASS_KEY)
    }

    pub fn set_theme(&mut self, theme: ThemeName) -> Result<()> {
        self.store
            .set(THEME_KEY, theme.as_str())
            .context("Failed to save theme")?;
        log::info!("Theme set to {}", theme);
        Ok(())
    }

    pub fn set_glass_level(&mut self, level: GlassLevel) -> Result<()> {
        self.store
            .set(GLASS_KEY, level.as_str())
            .context("Failed to save glassmorphism level")?;
        log::info!("Glassmorphism set to {}", level);
        Ok(())
    }

    /// Document classes for the current preferences, e.g. `theme-neon glass-high`.
    pub fn css_classes(&self) -> Result<String> {
        Ok(format!(
            "theme-{} glass-{}",
            self.theme()?,
            self.glass_level()?
        ))
    }

    fn read<T>(&self, key: &str) -> Result<T>
    where
        T: std::str::FromStr<Err = String> + Default,
    {
        let stored = self
            .store
            .get(key)
            .with_context(|| format!("Failed to read {}", key))?;
        Ok(match stored {
            None => T::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("{} (stored under {}); using default", err, key);
                T::default()
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;

    #[test]
    fn defaults_when_nothing_stored() {
        let mut store = MemoryStore::new();
        let service = ThemeService::new(&mut store);
        assert_eq!(service.theme().unwrap(), ThemeName::Dark);
        assert_eq!(service.glass_level().unwrap(), GlassLevel::Medium);
        assert_eq!(service.css_classes().unwrap(), "theme-dark glass-medium");
    }

    #[test]
    fn preferences_persist_in_store() {
        let mut store = MemoryStore::new();
        {
            let mut service = ThemeService::new(&mut store);
            service.set_theme(ThemeName::Cyberpunk).unwrap();
            service.set_glass_level(GlassLevel::High).unwrap();
        }
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("cyberpunk"));

        let service = ThemeService::new(&mut store);
        assert_eq!(service.css_classes().unwrap(), "theme-cyberpunk glass-high");
    }

    #[test]
    fn unknown_stored_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        let service = ThemeService::new(&mut store);
        assert_eq!(service.theme().unwrap(), ThemeName::Dark);
    }
}
