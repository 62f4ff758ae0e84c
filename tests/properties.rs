//! Property-based tests for the color math and the extraction invariants.

use hueset::{
    color::{color_distance, hsl_to_hex, rgb_to_hex, rgb_to_hsl},
    filter_similar_colors, quantize, Hsl, PaletteBuilder, Swatch, Theme, ThemePalettes,
};
use palette::{FromColor, Srgb};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn is_hex_color(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

fn decode_hex(hex: &str) -> (u8, u8, u8) {
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
    (channel(1), channel(3), channel(5))
}

fn hue_distance(lhs: i32, rhs: i32) -> i32 {
    let diff = (lhs - rhs).rem_euclid(360);
    diff.min(360 - diff)
}

fn rgb_strategy() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

// opaque-ish images of up to 24x24 pixels
fn image_strategy() -> impl Strategy<Value = (Vec<u8>, u32, u32)> {
    (1u32..24, 1u32..24).prop_flat_map(|(width, height)| {
        prop::collection::vec((rgb_strategy(), 128u8..=255), (width * height) as usize).prop_map(move |pixels| {
            let data = pixels
                .into_iter()
                .flat_map(|((r, g, b), a)| [r, g, b, a])
                .collect();

            (data, width, height)
        })
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn hex_is_always_seven_uppercase_characters(rgb in rgb_strategy()) {
        prop_assert!(is_hex_color(&rgb_to_hex(rgb)));
    }

    /// Going HSL -> hex -> HSL is accurate to one unit for well-saturated mid-lightness colors.
    #[test]
    fn hsl_nearly_round_trips(hue in 0i32..360, saturation in 90i32..=100, lightness in 45i32..=55) {
        let back = rgb_to_hsl(decode_hex(&hsl_to_hex(hue, saturation, lightness)));

        prop_assert!(hue_distance(back.hue(), hue) <= 1, "hue {} -> {}", hue, back.hue());
        prop_assert!((back.saturation() - saturation).abs() <= 1, "saturation {} -> {}", saturation, back.saturation());
        prop_assert!((back.lightness() - lightness).abs() <= 1, "lightness {} -> {}", lightness, back.lightness());
    }

    /// The integer conversion agrees with the `palette` crate up to rounding.
    #[test]
    fn hsl_matches_reference_implementation(rgb in rgb_strategy()) {
        let ours = rgb_to_hsl(rgb);
        let reference: palette::Hsl = palette::Hsl::from_color(Srgb::new(rgb.0, rgb.1, rgb.2).into_format::<f32>());

        let hue = reference.hue.into_positive_degrees().round() as i32;
        let saturation = (reference.saturation * 100.0).round() as i32;
        let lightness = (reference.lightness * 100.0).round() as i32;

        prop_assert!((ours.lightness() - lightness).abs() <= 1);
        prop_assert!((ours.saturation() - saturation).abs() <= 1);
        if ours.saturation() > 0 && saturation > 0 {
            prop_assert!(hue_distance(ours.hue(), hue) <= 1);
        }
    }

    #[test]
    fn hsl_to_hex_accepts_any_components(hue in -1000i32..1000, saturation in -50i32..150, lightness in -50i32..150) {
        let hex = hsl_to_hex(hue, saturation, lightness);

        prop_assert!(is_hex_color(&hex));
        prop_assert_eq!(hex, Hsl::new(hue, saturation, lightness).to_hex());
    }

    #[test]
    fn quantization_is_idempotent(rgb in rgb_strategy(), factor in 1u8..=255) {
        let once = quantize(rgb, factor);
        prop_assert_eq!(quantize(once, factor), once);
    }

    #[test]
    fn kept_colors_are_pairwise_distinct(
        colors in prop::collection::vec((rgb_strategy(), 1u32..1000), 1..20),
        threshold in 0.0f64..120.0,
    ) {
        let swatches: Vec<_> = colors.into_iter().map(|(rgb, population)| Swatch::new(rgb, population)).collect();
        let kept = filter_similar_colors(&swatches, threshold);

        prop_assert_eq!(kept[0], swatches[0]);
        for (i, lhs) in kept.iter().enumerate() {
            for rhs in &kept[i + 1..] {
                prop_assert!(color_distance(lhs.rgb(), rhs.rgb()) >= threshold);
            }
        }
    }

    #[test]
    fn palette_has_between_one_and_eight_ranked_colors((data, width, height) in image_strategy()) {
        let palette = PaletteBuilder::from_rgba(data, width, height).generate().unwrap();
        let swatches = palette.swatches();

        prop_assert!(!swatches.is_empty() && swatches.len() <= 8);
        prop_assert!(swatches.windows(2).all(|pair| pair[0].impact() >= pair[1].impact()));
        prop_assert!(swatches.iter().all(|swatch| swatch.population() > 0 && swatch.impact() >= 0.0));

        let total: u32 = swatches.iter().map(|swatch| swatch.population()).sum();
        prop_assert!(total <= width * height);
    }

    #[test]
    fn every_theme_has_five_valid_colors(hue in 0i32..360, saturation in 0i32..=100, lightness in 0i32..=100) {
        let themes = ThemePalettes::generate(Hsl::new(hue, saturation, lightness));

        prop_assert_eq!(themes.iter().count(), Theme::ALL.len());
        for (_, palette) in themes.iter() {
            prop_assert_eq!(palette.len(), 5);
            prop_assert!(palette.iter().all(|hex| is_hex_color(hex)));
        }
    }
}
