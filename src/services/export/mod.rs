//! Palette export to framework configs, JSON and images.
//!
//! Text formats are rendered from the palette's hex codes, assigning the
//! first colors to named roles and the rest to numbered slots.

mod image;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::models::palette::Palette;

pub use image::{render_png, IMAGE_HEIGHT, IMAGE_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tailwind,
    MaterialUi,
    CssVariables,
    Json,
    HexCodes,
    Png,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        Self::Tailwind,
        Self::MaterialUi,
        Self::CssVariables,
        Self::Json,
        Self::HexCodes,
        Self::Png,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::MaterialUi => "mui",
            Self::CssVariables => "css",
            Self::Json => "json",
            Self::HexCodes => "codes",
            Self::Png => "png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Tailwind | Self::MaterialUi => "js",
            Self::CssVariables => "css",
            Self::Json => "json",
            Self::HexCodes => "txt",
            Self::Png => "png",
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Self::Png)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "material-ui" | "materialui" => return Ok(Self::MaterialUi),
            "hex" => return Ok(Self::HexCodes),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("Unknown export format {:?} (expected one of {})", s, known.join(", "))
            })
    }
}

fn tailwind_role(index: usize) -> String {
    match index {
        0 => "primary".to_string(),
        1 => "secondary".to_string(),
        2 => "accent".to_string(),
        3 => "highlight".to_string(),
        _ => format!("color{}", index + 1),
    }
}

fn css_role(index: usize) -> String {
    match index {
        0..=3 => tailwind_role(index),
        _ => format!("color-{}", index + 1),
    }
}

// MUI only has five palette slots; everything past the fourth is "warning".
fn mui_role(index: usize) -> &'static str {
    match index {
        0 => "primary",
        1 => "secondary",
        2 => "info",
        3 => "success",
        _ => "warning",
    }
}

pub fn tailwind_config(palette: &Palette) -> String {
    let mut config = String::from(
        "// tailwind.config.js\nmodule.exports = {\n  theme: {\n    extend: {\n      colors: {\n",
    );
    for (index, color) in palette.colors.iter().enumerate() {
        config.push_str(&format!("        '{}': '{}',\n", tailwind_role(index), color.hex));
    }
    config.push_str("      },\n    },\n  },\n}");
    config
}

pub fn material_ui_theme(palette: &Palette) -> String {
    let mut config = String::from(
        "// theme.js\nimport { createTheme } from '@mui/material/styles';\n\nconst theme = createTheme({\n  palette: {\n",
    );
    for (index, color) in palette.colors.iter().enumerate() {
        config.push_str(&format!(
            "    {}: {{\n      main: '{}',\n    }},\n",
            mui_role(index),
            color.hex
        ));
    }
    config.push_str("  },\n});\n\nexport default theme;");
    config
}

pub fn css_variables(palette: &Palette) -> String {
    let mut css = String::from(":root {\n");
    for (index, color) in palette.colors.iter().enumerate() {
        css.push_str(&format!("  --color-{}: {};\n", css_role(index), color.hex));
    }
    css.push('}');
    css
}

pub fn palette_json(palette: &Palette) -> Result<String> {
    serde_json::to_string_pretty(palette).context("Failed to serialize palette")
}

/// Render a text format. Fails for binary formats.
pub fn render_text(palette: &Palette, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Tailwind => tailwind_config(palette),
        ExportFormat::MaterialUi => material_ui_theme(palette),
        ExportFormat::CssVariables => css_variables(palette),
        ExportFormat::Json => palette_json(palette)?,
        ExportFormat::HexCodes => palette.hex_codes(),
        ExportFormat::Png => bail!("{} is a binary format", format),
    })
}

/// Suggested download name, e.g. `Neon Dreams.json`.
pub fn file_name(palette: &Palette, format: ExportFormat) -> String {
    let stem: String = if palette.name.trim().is_empty() {
        "palette".to_string()
    } else {
        palette
            .name
            .trim()
            .chars()
            .filter(|c| *c != '"')
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '<' | '>' | '|' => '-',
                _ => c,
            })
            .collect()
    };
    format!("{}.{}", stem, format.extension())
}

/// Write a palette export to `path`.
pub fn write_export(palette: &Palette, format: ExportFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let bytes = if format.is_binary() {
        render_png(palette)?
    } else {
        render_text(palette, format)?.into_bytes()
    };
    fs::write(path, bytes)
        .with_context(|| format!("failed to write {} export to {}", format, path.display()))?;
    log::info!("Exported palette {} as {} to {}", palette.id, format, path.display());
    Ok(())
}
