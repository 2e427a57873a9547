//! WCAG 2.x contrast evaluation for palettes.
//!
//! Every unordered pair of colors in a palette is scored with the WCAG
//! contrast ratio and classified against the AA (4.5:1) and AAA (7:1)
//! thresholds for normal-size text.
//!
//! Evaluation is a pure function of its input: no shared state, no I/O, so
//! it can be called from any number of threads at once.

use serde::Serialize;

use crate::models::color::{ColorError, RgbColor};
use crate::models::palette::Palette;

/// Minimum ratio for WCAG AA, normal text.
pub const AA_THRESHOLD: f64 = 4.5;
/// Minimum ratio for WCAG AAA, normal text.
pub const AAA_THRESHOLD: f64 = 7.0;

/// Shown next to a pair that fails AA.
pub const LOW_CONTRAST_ADVICE: &str =
    "Consider adjusting for better contrast (ratio should be at least 4.5:1)";

/// Highest compliance level a pair reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceLevel {
    Fail,
    Aa,
    Aaa,
}

impl ComplianceLevel {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            Self::Aaa
        } else if ratio >= AA_THRESHOLD {
            Self::Aa
        } else {
            Self::Fail
        }
    }
}

/// Score for one unordered pair of palette colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastPairResult {
    /// First color, exactly as supplied
    pub color1: String,
    /// Second color, exactly as supplied
    pub color2: String,
    /// Contrast ratio in `[1.0, 21.0]`
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

impl ContrastPairResult {
    fn new(color1: &str, color2: &str, ratio: f64) -> Self {
        Self {
            color1: color1.to_string(),
            color2: color2.to_string(),
            ratio,
            passes_aa: ratio >= AA_THRESHOLD,
            passes_aaa: ratio >= AAA_THRESHOLD,
        }
    }

    pub fn level(&self) -> ComplianceLevel {
        ComplianceLevel::for_ratio(self.ratio)
    }

    /// Advice for pairs that miss AA; `None` when AA passes.
    pub fn recommendation(&self) -> Option<&'static str> {
        (!self.passes_aa).then_some(LOW_CONTRAST_ADVICE)
    }
}

/// Linearise one 8-bit sRGB channel.
fn srgb_component(value: u8) -> f64 {
    let channel = f64::from(value) / 255.0;
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(color: RgbColor) -> f64 {
    let r = srgb_component(color.r);
    let g = srgb_component(color.g);
    let b = srgb_component(color.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio; symmetric and always in `[1.0, 21.0]`.
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio between two relative luminances, in either order.
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex codes.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(RgbColor::from_hex(a)?, RgbColor::from_hex(b)?))
}

/// Score every pair `(i, j)` with `i < j`, outer index first.
///
/// All inputs are parsed before any pair is scored, so a malformed code
/// fails the whole evaluation even when it would pair with nothing. The
/// error names the first malformed code in input order.
pub fn evaluate<S: AsRef<str>>(colors: &[S]) -> Result<Vec<ContrastPairResult>, ColorError> {
    let parsed = colors
        .iter()
        .map(|c| RgbColor::from_hex(c.as_ref()).map(|rgb| (c.as_ref(), relative_luminance(rgb))))
        .collect::<Result<Vec<_>, _>>()?;

    let n = parsed.len();
    let mut results = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, &(hex_a, lum_a)) in parsed.iter().enumerate() {
        for &(hex_b, lum_b) in &parsed[i + 1..] {
            let ratio = ratio_from_luminance(lum_a, lum_b);
            results.push(ContrastPairResult::new(hex_a, hex_b, ratio));
        }
    }

    log::debug!("Evaluated {} contrast pairs for {} colors", results.len(), n);
    Ok(results)
}

/// Evaluate a palette's colors by their hex codes.
pub fn evaluate_palette(palette: &Palette) -> Result<Vec<ContrastPairResult>, ColorError> {
    evaluate(&palette.hex_list())
}

/// Perceived-brightness test used to pick preview text color.
///
/// This is the quick YIQ-style weighting, not WCAG luminance.
pub fn is_light_color(color: RgbColor) -> bool {
    let brightness =
        (0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b))
            / 255.0;
    brightness > 0.5
}

/// `#000` on light swatches, `#fff` on dark ones.
pub fn preview_text_color(color: RgbColor) -> &'static str {
    if is_light_color(color) {
        "#000"
    } else {
        "#fff"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn black_and_white_luminance() {
        assert!(approx_eq(relative_luminance(RgbColor::BLACK), 0.0, 1e-12));
        assert!(approx_eq(relative_luminance(RgbColor::WHITE), 1.0, 1e-12));
    }

    #[test]
    fn primaries_carry_their_weights() {
        assert!(approx_eq(relative_luminance(RgbColor::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(RgbColor::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(RgbColor::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10/255 = 0.0392 sits just under the 0.03928 knee.
        let expected = (10.0 / 255.0) / 12.92;
        assert!(approx_eq(srgb_component(10), expected, 1e-12));
    }

    #[test]
    fn black_on_white_is_21() {
        let results = evaluate(&["#000000", "#FFFFFF"]).unwrap();
        assert_eq!(results.len(), 1);
        let pair = &results[0];
        assert!(approx_eq(pair.ratio, 21.0, 1e-9), "ratio {}", pair.ratio);
        assert!(pair.passes_aa && pair.passes_aaa);
        assert_eq!(pair.level(), ComplianceLevel::Aaa);
        assert_eq!(pair.recommendation(), None);
    }

    #[test]
    fn neighbouring_greys_fail_both_levels() {
        let results = evaluate(&["#777777", "#888888"]).unwrap();
        let pair = &results[0];
        assert!(pair.ratio >= 1.0 && pair.ratio < 1.5, "ratio {}", pair.ratio);
        assert!(!pair.passes_aa && !pair.passes_aaa);
        assert_eq!(pair.recommendation(), Some(LOW_CONTRAST_ADVICE));
    }

    #[test]
    fn pairs_follow_nested_enumeration() {
        let results = evaluate(&["#0F172A", "#7C3AED", "#2563EB"]).unwrap();
        let pairs: Vec<(&str, &str)> = results
            .iter()
            .map(|r| (r.color1.as_str(), r.color2.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("#0F172A", "#7C3AED"),
                ("#0F172A", "#2563EB"),
                ("#7C3AED", "#2563EB"),
            ]
        );
        assert!(results.iter().all(|r| (1.0..=21.0).contains(&r.ratio)));
    }

    #[test]
    fn identifiers_are_kept_as_supplied() {
        let results = evaluate(&["ffffff", "#000000"]).unwrap();
        assert_eq!(results[0].color1, "ffffff");
    }

    #[test]
    fn duplicates_pair_at_ratio_one() {
        let results = evaluate(&["#2563EB", "#2563eb"]).unwrap();
        assert_eq!(results[0].ratio, 1.0);
    }

    #[test]
    fn empty_and_single_inputs_yield_nothing() {
        let empty: [&str; 0] = [];
        assert!(evaluate(&empty).unwrap().is_empty());
        assert!(evaluate(&["#123456"]).unwrap().is_empty());
    }

    #[test]
    fn malformed_color_names_the_offender() {
        let err = evaluate(&["#12345", "#FFFFFF"]).unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("#12345".to_string()));

        let err = evaluate(&["#FFFFFF", "#000000", "nope"]).unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("nope".to_string()));
    }

    #[test_case(4.49, ComplianceLevel::Fail ; "just under AA")]
    #[test_case(4.5, ComplianceLevel::Aa ; "exactly AA")]
    #[test_case(6.99, ComplianceLevel::Aa ; "just under AAA")]
    #[test_case(7.0, ComplianceLevel::Aaa ; "exactly AAA")]
    #[test_case(21.0, ComplianceLevel::Aaa ; "maximum")]
    fn thresholds_are_inclusive(ratio: f64, expected: ComplianceLevel) {
        assert_eq!(ComplianceLevel::for_ratio(ratio), expected);
        let pair = ContrastPairResult::new("a", "b", ratio);
        assert_eq!(pair.passes_aa, ratio >= 4.5);
        assert_eq!(pair.passes_aaa, ratio >= 7.0);
    }

    #[test]
    fn hex_ratio_is_symmetric() {
        let ab = contrast_ratio_hex("#F472B6", "#0F172A").unwrap();
        let ba = contrast_ratio_hex("#0F172A", "#F472B6").unwrap();
        assert_eq!(ab, ba);
    }

    #[test_case("#FFFFFF", "#000" ; "white swatch")]
    #[test_case("#FDE047", "#000" ; "yellow swatch")]
    #[test_case("#0F172A", "#fff" ; "navy swatch")]
    #[test_case("#7C3AED", "#fff" ; "violet swatch")]
    fn preview_text_contrasts_with_swatch(hex: &str, expected: &str) {
        let rgb = RgbColor::from_hex(hex).unwrap();
        assert_eq!(preview_text_color(rgb), expected);
    }

    #[test]
    fn evaluates_palette_in_color_order() {
        let palette =
            Palette::from_hex_codes("p", "Mono", &["#000000", "#FFFFFF", "#777777"]).unwrap();
        let results = evaluate_palette(&palette).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].color1, "#FFFFFF");
    }
}
