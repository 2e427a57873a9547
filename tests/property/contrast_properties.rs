// Property-based tests for contrast evaluation
// Checks the WCAG invariants over random colors and palettes

use proptest::prelude::*;
use splash_palette::models::color::{Color, ColorError, RgbColor};
use splash_palette::services::contrast::{contrast_ratio, evaluate, AAA_THRESHOLD, AA_THRESHOLD};

fn rgb() -> impl Strategy<Value = RgbColor> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RgbColor::new(r, g, b))
}

fn hex_code() -> impl Strategy<Value = String> {
    "#?[0-9a-fA-F]{6}"
}

proptest! {
    /// Property: argument order never changes the ratio
    #[test]
    fn prop_ratio_is_symmetric(a in rgb(), b in rgb()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    /// Property: a color against itself is exactly 1:1
    #[test]
    fn prop_ratio_is_reflexive(a in rgb()) {
        prop_assert_eq!(contrast_ratio(a, a), 1.0);
    }

    /// Property: every ratio lies in [1, 21]
    #[test]
    fn prop_ratio_is_bounded(a in rgb(), b in rgb()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0, "ratio {} below 1", ratio);
        prop_assert!(ratio <= 21.0 + 1e-9, "ratio {} above 21", ratio);
    }

    /// Property: evaluate agrees with contrast_ratio, whatever the pair order
    #[test]
    fn prop_evaluate_matches_pairwise_ratio(a in rgb(), b in rgb()) {
        let forward = evaluate(&[a.to_hex(), b.to_hex()]).unwrap();
        let backward = evaluate(&[b.to_hex(), a.to_hex()]).unwrap();
        let ratio = forward[0].ratio;
        prop_assert_eq!(ratio, backward[0].ratio);
        prop_assert_eq!(ratio, contrast_ratio(a, b));
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {} out of bounds", ratio);
    }

    /// Property: passing AAA always means passing AA, and flags match thresholds
    #[test]
    fn prop_classification_is_monotonic(codes in prop::collection::vec(hex_code(), 2..8)) {
        for result in evaluate(&codes).unwrap() {
            prop_assert!(!result.passes_aaa || result.passes_aa);
            prop_assert_eq!(result.passes_aa, result.ratio >= AA_THRESHOLD);
            prop_assert_eq!(result.passes_aaa, result.ratio >= AAA_THRESHOLD);
        }
    }

    /// Property: n colors give n(n-1)/2 pairs in nested-loop order
    #[test]
    fn prop_pair_count_and_order(codes in prop::collection::vec(hex_code(), 0..12)) {
        let results = evaluate(&codes).unwrap();
        let n = codes.len();
        prop_assert_eq!(results.len(), n * n.saturating_sub(1) / 2);

        let mut k = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                prop_assert_eq!(&results[k].color1, &codes[i]);
                prop_assert_eq!(&results[k].color2, &codes[j]);
                k += 1;
            }
        }
    }

    /// Property: codes of the wrong length are rejected by name
    #[test]
    fn prop_wrong_length_is_rejected(
        bad in "#?([0-9a-f]{0,5}|[0-9a-f]{7,9})",
        good in hex_code(),
    ) {
        let err = evaluate(&[good, bad.clone()]).unwrap_err();
        prop_assert_eq!(err, ColorError::InvalidColorFormat(bad));
    }

    /// Property: colors built from RGB always agree with themselves
    #[test]
    fn prop_constructed_colors_are_consistent(a in rgb()) {
        let color = Color::from_rgb(a);
        prop_assert!(color.validate().is_ok(), "{:?} failed validation", color);
        prop_assert_eq!(RgbColor::from_hex(&color.hex).unwrap(), a);
    }
}
