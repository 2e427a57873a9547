//! Color model with redundant hex / RGB / HSL representations.
//!
//! A stored palette color carries three strings describing the same value.
//! `RgbColor` is the source of truth; the hex and HSL forms are derived from
//! it when a color is constructed and checked against it when a color is
//! loaded from storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing or checking colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?} (expected 6 hex digits such as #3B82F6)")]
    InvalidColorFormat(String),
    #[error("invalid rgb triple: {0:?} (expected \"r, g, b\")")]
    InvalidRgbFormat(String),
    #[error("invalid hsl triple: {0:?} (expected \"h, s%, l%\")")]
    InvalidHslFormat(String),
    #[error("color {hex} disagrees with its rgb ({rgb}) or hsl ({hsl}) form")]
    InconsistentColor {
        hex: String,
        rgb: String,
        hsl: String,
    },
}

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// The input is not trimmed; anything other than exactly six hex digits
    /// after an optional single `#` is rejected.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(value.to_string());
        let hex = value.strip_prefix('#').unwrap_or(value);
        // from_str_radix accepts a leading '+', so check the digits ourselves.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Canonical uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels normalised to `[0, 1]`.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidRgbFormat(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let r = parts[0].parse::<u8>().map_err(|_| invalid())?;
        let g = parts[1].parse::<u8>().map_err(|_| invalid())?;
        let b = parts[2].parse::<u8>().map_err(|_| invalid())?;
        Ok(Self::new(r, g, b))
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_string()
    }
}

/// HSL triple rounded to whole degrees and percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HslColor {
    /// Hue in degrees, `0..360`
    pub h: u16,
    /// Saturation percentage, `0..=100`
    pub s: u8,
    /// Lightness percentage, `0..=100`
    pub l: u8,
}

impl HslColor {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Standard RGB → HSL conversion.
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Self::new(0, 0, to_percent(l));
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let hue = (sector * 60.0).round() as u16 % 360;

        Self::new(hue, to_percent(s), to_percent(l))
    }

    /// True when both triples differ by at most `tolerance` in every
    /// component (hue compared on the circle).
    pub fn approx_eq(self, other: HslColor, tolerance: u16) -> bool {
        let raw = self.h.abs_diff(other.h);
        let hue_diff = raw.min(360 - raw.min(360));
        // Hue is meaningless for greys, where saturation is zero.
        let hue_ok = hue_diff <= tolerance || (self.s == 0 && other.s == 0);
        hue_ok
            && u16::from(self.s.abs_diff(other.s)) <= tolerance
            && u16::from(self.l.abs_diff(other.l)) <= tolerance
    }
}

fn to_percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}%, {}%", self.h, self.s, self.l)
    }
}

impl FromStr for HslColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHslFormat(s.to_string());
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let h = parts[0].parse::<u16>().map_err(|_| invalid())?;
        let s_pct = parts[1]
            .trim_end_matches('%')
            .parse::<u8>()
            .map_err(|_| invalid())?;
        let l_pct = parts[2]
            .trim_end_matches('%')
            .parse::<u8>()
            .map_err(|_| invalid())?;
        if h >= 360 || s_pct > 100 || l_pct > 100 {
            return Err(invalid());
        }
        Ok(Self::new(h, s_pct, l_pct))
    }
}

impl TryFrom<String> for HslColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HslColor> for String {
    fn from(color: HslColor) -> Self {
        color.to_string()
    }
}

/// A palette color as it is stored and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub rgb: RgbColor,
    pub hsl: HslColor,
}

impl Color {
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: HslColor::from_rgb(rgb),
        }
    }

    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        RgbColor::from_hex(value).map(Self::from_rgb)
    }

    /// Check that the three representations describe the same color.
    ///
    /// HSL is allowed ±1 per component to absorb rounding in stored data.
    pub fn validate(&self) -> Result<(), ColorError> {
        let parsed = RgbColor::from_hex(&self.hex)?;
        let expected_hsl = HslColor::from_rgb(parsed);
        if parsed != self.rgb || !expected_hsl.approx_eq(self.hsl, 1) {
            return Err(ColorError::InconsistentColor {
                hex: self.hex.clone(),
                rgb: self.rgb.to_string(),
                hsl: self.hsl.to_string(),
            });
        }
        Ok(())
    }

    /// Rebuild the rgb and hsl forms from the hex code.
    pub fn normalized(&self) -> Result<Self, ColorError> {
        Self::from_hex(&self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
