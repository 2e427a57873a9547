// Built-in sample palettes
// Seeded into an empty store so a first run has something to show

use crate::models::color::{Color, ColorError};
use crate::models::palette::{Palette, PaletteSource};

const CYBERPUNK_NIGHT: [&str; 5] = ["#0F172A", "#7C3AED", "#2563EB", "#10B981", "#F472B6"];
const NEON_DREAMS: [&str; 5] = ["#18181B", "#6D28D9", "#4F46E5", "#0EA5E9", "#EC4899"];
const MIDNIGHT_GLOW: [&str; 5] = ["#0F172A", "#4338CA", "#1D4ED8", "#0369A1", "#0D9488"];

pub fn sample_palettes() -> Vec<Palette> {
    let build = |id: &str, name: &str, codes: &[&str], source: PaletteSource| {
        let colors = codes
            .iter()
            .map(|code| Color::from_hex(code))
            .collect::<Result<Vec<_>, ColorError>>();
        // The codes above are constants; a parse failure is a typo in this file.
        colors.map(|colors| Palette::new(id, name, colors).with_source(source))
    };

    [
        build("1", "Cyberpunk Night", &CYBERPUNK_NIGHT, PaletteSource::Text),
        build("2", "Neon Dreams", &NEON_DREAMS, PaletteSource::Text),
        build("3", "Midnight Glow", &MIDNIGHT_GLOW, PaletteSource::Image),
    ]
    .into_iter()
    .filter_map(|palette| match palette {
        Ok(palette) => Some(palette),
        Err(err) => {
            log::error!("Skipping malformed sample palette: {}", err);
            None
        }
    })
    .collect()
}
