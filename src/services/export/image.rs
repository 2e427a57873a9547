// PNG swatch strip
// An 800x400 card: dark background with one equal-width band per color

use anyhow::{bail, Context, Result};

use crate::models::color::RgbColor;
use crate::models::palette::Palette;

pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 400;

const BACKGROUND: RgbColor = RgbColor::new(0x0F, 0x17, 0x2A);
const MARGIN_X: u32 = 40;
const SWATCH_TOP: u32 = 100;
const SWATCH_HEIGHT: u32 = 200;

/// Swatch index covering column `x`, if any.
fn swatch_at(x: u32, count: usize) -> Option<usize> {
    if x < MARGIN_X || x >= IMAGE_WIDTH - MARGIN_X {
        return None;
    }
    let swatch_width = f64::from(IMAGE_WIDTH - 2 * MARGIN_X) / count as f64;
    let index = (f64::from(x - MARGIN_X) / swatch_width) as usize;
    Some(index.min(count - 1))
}

/// Encode the palette card as PNG bytes.
pub fn render_png(palette: &Palette) -> Result<Vec<u8>> {
    if palette.colors.is_empty() {
        bail!("Cannot render an empty palette");
    }

    let swatches = palette
        .colors
        .iter()
        .map(|c| RgbColor::from_hex(&c.hex))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pixels = Vec::with_capacity((IMAGE_WIDTH * IMAGE_HEIGHT * 3) as usize);
    for y in 0..IMAGE_HEIGHT {
        let in_band = (SWATCH_TOP..SWATCH_TOP + SWATCH_HEIGHT).contains(&y);
        for x in 0..IMAGE_WIDTH {
            let color = match swatch_at(x, swatches.len()) {
                Some(index) if in_band => swatches[index],
                _ => BACKGROUND,
            };
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
        }
    }

    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, IMAGE_WIDTH, IMAGE_HEIGHT);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .context("Failed to write PNG header")?;
    writer
        .write_image_data(&pixels)
        .context("Failed to encode PNG data")?;
    writer.finish().context("Failed to finish PNG stream")?;
    Ok(bytes)
}
