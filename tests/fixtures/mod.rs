// Test fixtures - reusable test data
// Provides consistent palettes across integration tests

#![allow(dead_code)]

use splash_palette::models::palette::Palette;

/// Hex code sets for testing
pub mod codes {
    /// Pure black and white: the maximum 21:1 contrast
    pub const BLACK_WHITE: [&str; 2] = ["#000000", "#FFFFFF"];

    /// Two neighbouring greys with almost no contrast
    pub const NEAR_GREYS: [&str; 2] = ["#777777", "#888888"];

    /// First three colors of the Cyberpunk Night sample
    pub const CYBERPUNK_HEAD: [&str; 3] = ["#0F172A", "#7C3AED", "#2563EB"];

    /// Mixed-case codes, with and without the leading hash
    pub const MIXED_CASE: [&str; 4] = ["#0f172a", "F472B6", "#10b981", "ffffff"];
}

/// Creates a palette with a fixed id from the given codes
pub fn palette(id: &str, name: &str, hex: &[&str]) -> Palette {
    Palette::from_hex_codes(id, name, hex).expect("fixture codes are valid")
}

/// A five-color palette resembling a generated one
pub fn sunset() -> Palette {
    palette(
        "",
        "Generated from \"sunset\"",
        &["#FF5E5B", "#D8D8D8", "#FFFFEA", "#00CECB", "#FFED66"],
    )
}
