//! Palette model.
//!
//! A palette is an ordered list of colors with a display name, plus the
//! bookkeeping the saved-palette list shows (creation/update timestamps and
//! where the palette came from).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::color::{Color, ColorError};

/// Longest palette name accepted by validation.
pub const MAX_NAME_LEN: usize = 100;

/// What a generated palette was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSource {
    Text,
    Image,
}

/// A named, ordered set of colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Unique identifier (UUID string for generated palettes)
    pub id: String,
    pub name: String,
    pub colors: Vec<Color>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PaletteSource>,
}

impl Palette {
    /// Create a palette stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
            created_at: Utc::now(),
            updated_at: None,
            source: None,
        }
    }

    pub fn with_source(mut self, source: PaletteSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Build a palette from hex codes, failing on the first malformed code.
    pub fn from_hex_codes<S: AsRef<str>>(
        id: impl Into<String>,
        name: impl Into<String>,
        codes: &[S],
    ) -> Result<Self, ColorError> {
        let colors = codes
            .iter()
            .map(|code| Color::from_hex(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(id, name, colors))
    }

    /// Name to show in listings; unnamed palettes get a placeholder.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Your Color Palette"
        } else {
            &self.name
        }
    }

    /// Hex codes in palette order.
    pub fn hex_list(&self) -> Vec<&str> {
        self.colors.iter().map(|c| c.hex.as_str()).collect()
    }

    /// Hex codes joined for the clipboard, e.g. `#0F172A, #7C3AED`.
    pub fn hex_codes(&self) -> String {
        self.hex_list().join(", ")
    }

    /// Validate the palette data.
    pub fn validate(&self) -> Result<(), PaletteValidationError> {
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(PaletteValidationError::NameTooLong);
        }
        if self.colors.is_empty() {
            return Err(PaletteValidationError::NoColors);
        }
        for (index, color) in self.colors.iter().enumerate() {
            color
                .validate()
                .map_err(|source| PaletteValidationError::InvalidColor { index, source })?;
        }
        Ok(())
    }
}

/// Validation errors for Palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteValidationError {
    NameTooLong,
    NoColors,
    InvalidColor { index: usize, source: ColorError },
}

impl std::fmt::Display for PaletteValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooLong => {
                write!(f, "Palette name must be {} characters or less", MAX_NAME_LEN)
            }
            Self::NoColors => write!(f, "Palette must contain at least one color"),
            Self::InvalidColor { index, source } => {
                write!(f, "Color {} is invalid: {}", index + 1, source)
            }
        }
    }
}

impl std::error::Error for PaletteValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
