//! Background color derivation.
//!
//! The background is the configured base color with its hue rotated and its
//! saturation nudged by values read from the digest. HSL conversion is done
//! by `palette` in `f64`.

use palette::{Hsl, IntoColor, Srgb};

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::value::map;

/// Degrees covered by the hue offset read from the digest.
///
/// The three hex digits at offset 14 (`0..=4095`) map onto `0..=359`.
pub const HUE_OFFSET_RANGE: f64 = 359.0;

/// Parses a `#rgb` or `#rrggbb` color (the leading `#` is optional).
pub fn parse_color(value: &str) -> Result<Srgb<u8>> {
    value.trim().parse::<Srgb<u8>>().map_err(|source| Error::InvalidColor {
        value: value.to_string(),
        source,
    })
}

/// Computes the background color for a digest.
///
/// - hue is decreased by `map(read(14, 3), 0, 4095, 0, 359)` degrees
/// - saturation moves by `read(17, 1)` percentage points: up when the value
///   is even, down when odd, clamped to `[0, 1]`
pub fn background_color(base: Srgb<u8>, digest: &Digest) -> Srgb<u8> {
    let hue_offset = map(digest.read_f64(14, 3), 0.0, 4095.0, 0.0, HUE_OFFSET_RANGE);
    let sat_offset = digest.read(17, 1);

    let rgb = Srgb::new(
        f64::from(base.red) / 255.0,
        f64::from(base.green) / 255.0,
        f64::from(base.blue) / 255.0,
    );
    let mut hsl: Hsl<palette::encoding::Srgb, f64> = rgb.into_color();
    hsl.hue -= hue_offset;

    let delta = f64::from(sat_offset) / 100.0;
    hsl.saturation = if sat_offset % 2 == 0 {
        (hsl.saturation + delta).min(1.0)
    } else {
        (hsl.saturation - delta).max(0.0)
    };

    let shifted: Srgb<f64> = hsl.into_color();
    Srgb::new(
        to_channel(shifted.red),
        to_channel(shifted.green),
        to_channel(shifted.blue),
    )
}

/// Formats a color the way the background rect expects it.
pub fn css_rgb(color: Srgb<u8>) -> String {
    format!("rgb({}, {}, {})", color.red, color.green, color.blue)
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_hex() {
        assert_eq!(parse_color("#933c3c").unwrap(), Srgb::new(0x93, 0x3c, 0x3c));
        assert_eq!(parse_color("#222").unwrap(), Srgb::new(0x22, 0x22, 0x22));
        assert_eq!(parse_color("2244aa").unwrap(), Srgb::new(0x22, 0x44, 0xaa));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "#", "#12", "#zzzzzz", "red", "#1234567"] {
            let err = parse_color(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidColor { ref value, .. } if value == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn background_for_github_is_stable() {
        let base = parse_color("#933c3c").unwrap();
        let color = background_color(base, &Digest::new("GitHub"));
        assert_eq!(css_rgb(color), "rgb(69, 94, 138)");
    }

    #[test]
    fn grey_base_stays_grey_when_saturation_drops() {
        // "GitHub" has an odd saturation offset, so a zero-saturation base
        // clamps at zero and keeps equal channels.
        let base = parse_color("#808080").unwrap();
        let color = background_color(base, &Digest::new("GitHub"));
        assert_eq!(color.red, color.green);
        assert_eq!(color.green, color.blue);
    }
}
