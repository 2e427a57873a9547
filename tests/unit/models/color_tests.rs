// Unit tests for hex color parsing and the derived representations

use splash_palette::models::color::{Color, ColorError, HslColor, RgbColor};
use test_case::test_case;

#[test_case("#0F172A", (15, 23, 42) ; "uppercase with hash")]
#[test_case("#0f172a", (15, 23, 42) ; "lowercase with hash")]
#[test_case("0F172a", (15, 23, 42) ; "mixed case without hash")]
#[test_case("#FFFFFF", (255, 255, 255) ; "white")]
#[test_case("000000", (0, 0, 0) ; "black without hash")]
fn accepts_six_digit_codes(input: &str, (r, g, b): (u8, u8, u8)) {
    assert_eq!(RgbColor::from_hex(input), Ok(RgbColor::new(r, g, b)));
}

#[test_case("#12345" ; "five digits")]
#[test_case("#FFF" ; "shorthand")]
#[test_case("#FFFFFF00" ; "eight digits with alpha")]
#[test_case("#GGGGGG" ; "non hex letters")]
#[test_case("#FFFFFF " ; "trailing space")]
#[test_case("##FFFFFF" ; "double hash")]
#[test_case("" ; "empty")]
fn rejects_other_shapes(input: &str) {
    assert_eq!(
        RgbColor::from_hex(input),
        Err(ColorError::InvalidColorFormat(input.to_string()))
    );
}

#[test_case("#FF0000", "0, 100%, 50%" ; "red")]
#[test_case("#00FF00", "120, 100%, 50%" ; "green")]
#[test_case("#0000FF", "240, 100%, 50%" ; "blue")]
#[test_case("#FFFFFF", "0, 0%, 100%" ; "white")]
#[test_case("#2563EB", "221, 83%, 53%" ; "sample blue")]
fn derives_hsl(hex: &str, expected: &str) {
    let color = Color::from_hex(hex).unwrap();
    assert_eq!(color.hsl.to_string(), expected);
}

#[test]
fn error_message_names_the_input() {
    let err = RgbColor::from_hex("#12345").unwrap_err();
    assert!(err.to_string().contains("\"#12345\""), "{}", err);
}

#[test]
fn hsl_tolerance_absorbs_rounding() {
    let computed = HslColor::from_rgb(RgbColor::new(0x7C, 0x3A, 0xED));
    assert_eq!(computed, HslColor::new(262, 83, 58));
    assert!(computed.approx_eq(HslColor::new(263, 84, 58), 1));
    assert!(!computed.approx_eq(HslColor::new(260, 83, 58), 1));
    // Hue wraps around the circle.
    assert!(HslColor::new(359, 50, 50).approx_eq(HslColor::new(0, 50, 50), 1));
}
