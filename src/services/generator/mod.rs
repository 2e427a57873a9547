//! Mock palette generation.
//!
//! There is no extraction or text model behind this: every palette is a
//! set of uniformly random colors. The request only decides the palette's
//! name and recorded source. The RNG is owned by the generator so a seeded
//! generator reproduces the same palettes, ids included.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use uuid::Builder;

use crate::models::color::{Color, RgbColor};
use crate::models::palette::{Palette, PaletteSource};
use crate::models::settings::{DEFAULT_PALETTE_SIZE, MAX_PALETTE_SIZE};

/// File extensions accepted as image uploads.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

const DEFAULT_NAME: &str = "Generated Palette";

/// What the user asked a palette to be generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Random,
    Text(String),
    Image(PathBuf),
}

pub struct PaletteGenerator<R: Rng = Pcg64> {
    rng: R,
    palette_size: usize,
}

impl PaletteGenerator<Pcg64> {
    /// Deterministic generator; the same seed yields the same palettes.
    pub fn seeded(seed: u64, palette_size: usize) -> Self {
        Self::with_rng(Pcg64::seed_from_u64(seed), palette_size)
    }

    pub fn from_entropy(palette_size: usize) -> Self {
        Self::with_rng(Pcg64::from_rng(&mut rand::rng()), palette_size)
    }
}

impl<R: Rng> PaletteGenerator<R> {
    /// `palette_size` is clamped to `1..=MAX_PALETTE_SIZE`.
    pub fn with_rng(rng: R, palette_size: usize) -> Self {
        let clamped = palette_size.clamp(1, MAX_PALETTE_SIZE);
        if clamped != palette_size {
            log::warn!(
                "Palette size {} out of range; using {}",
                palette_size,
                clamped
            );
        }
        Self {
            rng,
            palette_size: clamped,
        }
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn random_color(&mut self) -> Color {
        let [r, g, b] = self.rng.random::<[u8; 3]>();
        Color::from_rgb(RgbColor::new(r, g, b))
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Palette> {
        let (name, source) = match request {
            GenerationRequest::Random => (DEFAULT_NAME.to_string(), None),
            GenerationRequest::Text(prompt) => {
                let prompt = prompt.trim();
                if prompt.is_empty() {
                    bail!("Prompt cannot be empty");
                }
                (format!("Generated from \"{}\"", prompt), Some(PaletteSource::Text))
            }
            GenerationRequest::Image(path) => {
                check_image(path)?;
                (DEFAULT_NAME.to_string(), Some(PaletteSource::Image))
            }
        };

        let id = Builder::from_random_bytes(self.rng.random::<[u8; 16]>())
            .into_uuid()
            .to_string();
        let colors = (0..self.palette_size).map(|_| self.random_color()).collect();

        let mut palette = Palette::new(id, name, colors);
        palette.source = source;
        log::info!("Generated palette {} ({})", palette.id, palette.name);
        Ok(palette)
    }
}

impl Default for PaletteGenerator<Pcg64> {
    fn default() -> Self {
        Self::from_entropy(DEFAULT_PALETTE_SIZE)
    }
}

fn check_image(path: &Path) -> Result<()> {
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false);
    if !is_image {
        bail!("Not an image file: {}", path.display());
    }
    if !path.is_file() {
        bail!("Image file does not exist: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn seeded_generators_agree() {
        let a = PaletteGenerator::seeded(42, 5)
            .generate(&GenerationRequest::Random)
            .unwrap();
        let b = PaletteGenerator::seeded(42, 5)
            .generate(&GenerationRequest::Random)
            .unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.colors, b.colors);
    }

    #[test]
    fn generated_palette_is_valid_with_v4_id() {
        let palette = PaletteGenerator::seeded(7, 5)
            .generate(&GenerationRequest::Random)
            .unwrap();
        assert_eq!(palette.colors.len(), 5);
        assert!(palette.validate().is_ok());
        let id = Uuid::parse_str(&palette.id).unwrap();
        assert_eq!(id.get_version_num(), 4);
        assert_eq!(palette.name, "Generated Palette");
        assert_eq!(palette.source, None);
    }

    #[test]
    fn text_prompt_names_the_palette() {
        let palette = PaletteGenerator::seeded(1, 3)
            .generate(&GenerationRequest::Text("  ocean sunset ".to_string()))
            .unwrap();
        assert_eq!(palette.name, "Generated from \"ocean sunset\"");
        assert_eq!(palette.source, Some(PaletteSource::Text));
        assert_eq!(palette.colors.len(), 3);
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let mut generator = PaletteGenerator::seeded(1, 3);
        assert!(generator
            .generate(&GenerationRequest::Text("   ".to_string()))
            .is_err());
    }

    #[test]
    fn image_request_checks_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("beach.JPG");
        std::fs::write(&photo, b"not really a jpeg").unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"hello").unwrap();

        let mut generator = PaletteGenerator::seeded(3, 5);
        let palette = generator
            .generate(&GenerationRequest::Image(photo))
            .unwrap();
        assert_eq!(palette.source, Some(PaletteSource::Image));

        assert!(generator.generate(&GenerationRequest::Image(notes)).is_err());
        let missing = dir.path().join("missing.png");
        assert!(generator.generate(&GenerationRequest::Image(missing)).is_err());
    }

    #[test]
    fn palette_size_is_clamped() {
        assert_eq!(PaletteGenerator::seeded(0, 0).palette_size(), 1);
        assert_eq!(
            PaletteGenerator::seeded(0, 500).palette_size(),
            MAX_PALETTE_SIZE
        );
    }
}
