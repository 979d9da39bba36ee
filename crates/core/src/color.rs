//! Color types and conversion functions for colorharmony.
//!
//! Provides two color types (`Rgb`, `Hsl`) and pure conversion functions
//! between them and hexadecimal strings. Nothing in here holds state, so every
//! function is safe to call from any number of threads.
//!
//! Hex strings are accepted case insensitive with an optional leading `#` and
//! always produced as 6 uppercase digits without `#`. HSL to RGB truncates
//! each channel, so `hex -> HSL -> hex` may drift by at most 1 per channel.
//!
//! HSL arithmetic runs in `f32`. Truncation makes the last bit matter: the
//! same steps in `f64` land on a different channel for a few percent of
//! colors, and palette output is pinned to the single-precision results.

use crate::error::HarmonyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGB color.
///
/// Serializes as a 6-digit uppercase hex string like `"FF00AA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and luminosity in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "FF00AA".
    pub fn from_hex(hex: &str) -> Result<Rgb, HarmonyError> {
        hex_to_rgb(hex)
    }

    /// Formats the color as 6 uppercase hex digits, e.g. `"FF00AA"`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Returns `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Applies `f` to each channel independently.
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Rgb {
        Rgb {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb { r, g, b }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Checks every component against its domain.
    ///
    /// Conversions clamp instead of failing; this is for callers that want
    /// out-of-range input reported rather than silently corrected.
    pub fn validate(&self) -> Result<(), HarmonyError> {
        let checks = [
            ("hue", self.h, (0.0..360.0).contains(&self.h)),
            ("saturation", self.s, (0.0..=100.0).contains(&self.s)),
            ("luminosity", self.l, (0.0..=100.0).contains(&self.l)),
        ];
        match checks.iter().find(|(_, _, ok)| !ok) {
            Some(&(component, value, _)) => Err(HarmonyError::OutOfRange {
                component: component.to_string(),
                value: f64::from(value),
            }),
            None => Ok(()),
        }
    }
}

/// Converts a non-negative integer to uppercase hex digits without padding.
///
/// `decimal_to_hex(0)` is `"0"`, not `"00"`.
pub fn decimal_to_hex(value: u32) -> String {
    format!("{value:X}")
}

/// Parses a string of hex digits (case insensitive, optional leading `#`).
///
/// Returns `InvalidFormat` for an empty string, `InvalidDigit` for a character
/// outside `0-9A-F`, and `OutOfRange` if the value does not fit in a `u32`.
pub fn hex_to_decimal(hex: &str) -> Result<u32, HarmonyError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() {
        return Err(HarmonyError::InvalidFormat(hex.to_string()));
    }
    digits.chars().try_fold(0u32, |acc, c| {
        let d = c.to_digit(16).ok_or(HarmonyError::InvalidDigit(c))?;
        acc.checked_mul(16)
            .and_then(|v| v.checked_add(d))
            .ok_or_else(|| HarmonyError::OutOfRange {
                component: "hex value".to_string(),
                value: f64::from(u32::MAX) + 1.0,
            })
    })
}

/// Parses a 6-digit hex color into RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, HarmonyError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.chars().count() != 6 {
        tracing::debug!(input = hex, "rejected hex color: expected 6 digits");
        return Err(HarmonyError::InvalidFormat(hex.to_string()));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        tracing::debug!(input = hex, digit = %bad, "rejected hex color: invalid digit");
        return Err(HarmonyError::InvalidDigit(bad));
    }
    // Six validated digits fit in 24 bits.
    let v = hex_to_decimal(digits)?;
    Ok(Rgb {
        r: (v >> 16) as u8,
        g: (v >> 8) as u8,
        b: v as u8,
    })
}

/// Formats RGB as exactly 6 uppercase hex digits, zero-padded per channel.
pub fn rgb_to_hex(c: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

/// Parses a 6-digit hex color straight into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, HarmonyError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Converts RGB to HSL.
///
/// Achromatic input (all channels equal) yields hue 0 and saturation 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = f32::from(c.r) / 255.0;
    let g = f32::from(c.g) / 255.0;
    let b = f32::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let del = |v: f32| ((max - v) / 6.0 + delta / 2.0) / delta;
    let (del_r, del_g, del_b) = (del(r), del(g), del(b));

    // When two channels tie for max, blue wins over green wins over red.
    let mut h = if b == max {
        2.0 / 3.0 + del_g - del_r
    } else if g == max {
        1.0 / 3.0 + del_r - del_b
    } else {
        del_b - del_g
    };
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Converts HSL to RGB, truncating each channel to an integer.
///
/// Saturation and luminosity are clamped to [0, 100]; the hue is wrapped.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h / 360.0;
    let s = (c.s / 100.0).clamp(0.0, 1.0);
    let l = (c.l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let var2 = if l < 0.5 { l * (1.0 + s) } else { l + s - s * l };
    let var1 = 2.0 * l - var2;

    Rgb {
        r: to_channel(hue_to_channel(var1, var2, h + 1.0 / 3.0)),
        g: to_channel(hue_to_channel(var1, var2, h)),
        b: to_channel(hue_to_channel(var1, var2, h - 1.0 / 3.0)),
    }
}

/// Converts HSL straight to a 6-digit hex string.
pub fn hsl_to_hex(c: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(c))
}

/// Piecewise hue-to-channel step of the HSL inverse transform.
fn hue_to_channel(var1: f32, var2: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if 6.0 * t < 1.0 {
        var1 + (var2 - var1) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        var2
    } else if 3.0 * t < 2.0 {
        var1 + (var2 - var1) * (2.0 / 3.0 - t) * 6.0
    } else {
        var1
    }
}

/// Scales a [0, 1] fraction to a channel, truncating.
fn to_channel(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_hsl(actual: Hsl, h: f32, s: f32, l: f32) {
        assert!(
            approx_eq(actual.h, h) && approx_eq(actual.s, s) && approx_eq(actual.l, l),
            "expected ({h}, {s}, {l}), got {actual:?}"
        );
    }

    // -- Decimal / hex digits --

    #[test]
    fn decimal_to_hex_zero_is_single_digit() {
        assert_eq!(decimal_to_hex(0), "0");
    }

    #[test]
    fn decimal_to_hex_is_uppercase_and_unpadded() {
        assert_eq!(decimal_to_hex(255), "FF");
        assert_eq!(decimal_to_hex(10), "A");
        assert_eq!(decimal_to_hex(4096), "1000");
    }

    #[test]
    fn hex_to_decimal_parses_both_cases_and_hash() {
        assert_eq!(hex_to_decimal("FF").unwrap(), 255);
        assert_eq!(hex_to_decimal("#ff").unwrap(), 255);
        assert_eq!(hex_to_decimal("0").unwrap(), 0);
        assert_eq!(hex_to_decimal("FFFFFF").unwrap(), 0xFF_FFFF);
    }

    #[test]
    fn hex_to_decimal_rejects_invalid_digit() {
        assert_eq!(hex_to_decimal("1G"), Err(HarmonyError::InvalidDigit('G')));
        assert_eq!(hex_to_decimal("#-1"), Err(HarmonyError::InvalidDigit('-')));
    }

    #[test]
    fn hex_to_decimal_rejects_empty() {
        assert!(matches!(
            hex_to_decimal(""),
            Err(HarmonyError::InvalidFormat(_))
        ));
        assert!(matches!(
            hex_to_decimal("#"),
            Err(HarmonyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn hex_to_decimal_reports_overflow() {
        assert_eq!(hex_to_decimal("FFFFFFFF").unwrap(), u32::MAX);
        assert!(matches!(
            hex_to_decimal("100000000"),
            Err(HarmonyError::OutOfRange { .. })
        ));
    }

    // -- Hex <-> RGB --

    #[test]
    fn hex_to_rgb_parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#FF0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(hex_to_rgb("ff0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(hex_to_rgb("804020").unwrap(), Rgb::new(0x80, 0x40, 0x20));
    }

    #[test]
    fn hex_to_rgb_rejects_wrong_length() {
        for input in ["", "#", "#fff", "12345", "#1234567", "ff00ff00"] {
            assert_eq!(
                hex_to_rgb(input),
                Err(HarmonyError::InvalidFormat(input.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn hex_to_rgb_rejects_invalid_digit() {
        assert_eq!(hex_to_rgb("#gggggg"), Err(HarmonyError::InvalidDigit('g')));
        assert_eq!(hex_to_rgb("12 456"), Err(HarmonyError::InvalidDigit(' ')));
        // Only one leading '#' is stripped.
        assert_eq!(hex_to_rgb("##12345"), Err(HarmonyError::InvalidDigit('#')));
    }

    #[test]
    fn hex_to_rgb_splits_channels_in_order() {
        assert_eq!(hex_to_rgb("0000FF").unwrap(), Rgb::new(0, 0, 255));
        assert_eq!(hex_to_rgb("01FE80").unwrap(), Rgb::new(1, 254, 128));
    }

    #[test]
    fn hex_to_rgb_rejects_non_ascii_without_panicking() {
        assert_eq!(hex_to_rgb("12345é"), Err(HarmonyError::InvalidDigit('é')));
        assert!(matches!(
            hex_to_rgb("éééééééé"),
            Err(HarmonyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rgb_to_hex_pads_each_channel() {
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "000000");
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)), "010203");
        assert_eq!(rgb_to_hex(Rgb::new(255, 255, 255)), "FFFFFF");
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xDE).to_hex(), "AB0CDE");
    }

    // -- RGB <-> HSL --

    #[test]
    fn rgb_to_hsl_white_and_black() {
        assert_hsl(rgb_to_hsl(Rgb::WHITE), 0.0, 0.0, 100.0);
        assert_hsl(rgb_to_hsl(Rgb::BLACK), 0.0, 0.0, 0.0);
    }

    #[test]
    fn rgb_to_hsl_primaries() {
        assert_hsl(rgb_to_hsl(Rgb::new(255, 0, 0)), 0.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(Rgb::new(0, 255, 0)), 120.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(Rgb::new(0, 0, 255)), 240.0, 100.0, 50.0);
    }

    #[test]
    fn rgb_to_hsl_gray_is_achromatic() {
        let hsl = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(approx_eq(hsl.l, 128.0 / 255.0 * 100.0));
    }

    #[test]
    fn rgb_to_hsl_tied_max_prefers_blue_branch() {
        // Red and blue tie for max; the blue branch applies.
        assert_hsl(rgb_to_hsl(Rgb::new(255, 0, 255)), 300.0, 100.0, 50.0);
    }

    #[test]
    fn hsl_to_rgb_white_and_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsl_to_rgb_truncates_instead_of_rounding() {
        // 0.5 * 255 = 127.5
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 50.0)), Rgb::new(127, 127, 127));
    }

    #[test]
    fn hsl_to_rgb_runs_in_single_precision() {
        // Blue's offset wraps to just under 2/3 in f32 and picks up a sliver of var2.
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 60.0, 50.0)), Rgb::new(204, 50, 51));
    }

    #[test]
    fn rgb_to_hsl_keeps_f32_rounding() {
        let hsl = rgb_to_hsl(Rgb::new(0, 255, 255));
        assert_eq!(hsl.h, 180.000_02);
        assert_eq!(hsl_to_rgb(hsl), Rgb::new(0, 254, 255));
    }

    #[test]
    fn hsl_to_rgb_clamps_out_of_range_components() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 150.0)), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, -10.0)), Rgb::BLACK);
        assert_eq!(
            hsl_to_rgb(Hsl::new(0.0, 250.0, 50.0)),
            hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0))
        );
    }

    #[test]
    fn hsl_to_rgb_full_turn_matches_zero() {
        assert_eq!(
            hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)),
            hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0))
        );
    }

    #[test]
    fn hex_hsl_composition() {
        assert_hsl(hex_to_hsl("#FFFFFF").unwrap(), 0.0, 0.0, 100.0);
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 100.0)), "FFFFFF");
        assert!(hex_to_hsl("#FFF").is_err());
    }

    // -- Validation --

    #[test]
    fn hsl_validate_accepts_in_domain() {
        assert!(Hsl::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(Hsl::new(359.9, 100.0, 100.0).validate().is_ok());
    }

    #[test]
    fn hsl_validate_reports_offending_component() {
        let err = Hsl::new(360.0, 50.0, 50.0).validate().unwrap_err();
        assert!(matches!(err, HarmonyError::OutOfRange { ref component, .. } if component == "hue"));

        let err = Hsl::new(10.0, 101.0, 50.0).validate().unwrap_err();
        assert!(
            matches!(err, HarmonyError::OutOfRange { ref component, .. } if component == "saturation")
        );

        let err = Hsl::new(10.0, 50.0, f32::NAN).validate().unwrap_err();
        assert!(
            matches!(err, HarmonyError::OutOfRange { ref component, .. } if component == "luminosity")
        );
    }

    // -- Serde --

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 170)).unwrap();
        assert_eq!(json, "\"FF00AA\"");
    }

    #[test]
    fn rgb_deserializes_from_hex_string() {
        let c: Rgb = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(c, Rgb::new(0, 255, 0));
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        let result: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            any::<(u8, u8, u8)>().prop_map(Rgb::from)
        }

        proptest! {
            #[test]
            fn hex_rgb_round_trip_is_exact(hex in "#?[0-9a-fA-F]{6}") {
                let expected = hex.trim_start_matches('#').to_uppercase();
                prop_assert_eq!(rgb_to_hex(hex_to_rgb(&hex).unwrap()), expected);
            }

            #[test]
            fn hex_hsl_round_trip_drifts_at_most_one(c in any_rgb()) {
                let back = hex_to_rgb(&hsl_to_hex(hex_to_hsl(&c.to_hex()).unwrap())).unwrap();
                for (a, b) in c.channels().iter().zip(back.channels().iter()) {
                    prop_assert!(
                        (i16::from(*a) - i16::from(*b)).abs() <= 1,
                        "{:?} came back as {:?}", c, back
                    );
                }
            }

            #[test]
            fn rgb_to_hsl_stays_in_domain(c in any_rgb()) {
                let hsl = rgb_to_hsl(c);
                prop_assert!(hsl.validate().is_ok(), "{:?} -> {:?}", c, hsl);
            }

            #[test]
            fn zero_saturation_is_always_gray(h in -720.0_f32..720.0, l in 0.0_f32..=100.0) {
                let c = hsl_to_rgb(Hsl::new(h, 0.0, l));
                prop_assert!(c.r == c.g && c.g == c.b, "{:?} is not gray", c);
            }

            #[test]
            fn decimal_hex_round_trip(v: u32) {
                prop_assert_eq!(hex_to_decimal(&decimal_to_hex(v)).unwrap(), v);
            }
        }
    }
}
