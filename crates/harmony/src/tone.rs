//! Channel and hue arithmetic shared by the palette schemes.

use colorharmony_core::{RandomSource, Rgb};

/// Channel value the tonal variants measure their distance from.
const MIDPOINT: i32 = 128;

/// Tonal variants used for palette roles 2, 3 and 4.
///
/// Each variant moves a channel to a fixed anchor, then pushes it away from
/// the anchor by a fraction of how far the channel sat from 128, in the same
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Anchor 192, half the distance.
    Light,
    /// Anchor 90, half the distance.
    Dark,
    /// Anchor 215, a quarter of the distance.
    Pale,
}

impl Tone {
    fn anchor(self) -> i32 {
        match self {
            Tone::Light => 192,
            Tone::Dark => 90,
            Tone::Pale => 215,
        }
    }

    fn divisor(self) -> i32 {
        match self {
            Tone::Light | Tone::Dark => 2,
            Tone::Pale => 4,
        }
    }

    /// Applies the variant to one channel.
    ///
    /// A channel of exactly 128 lands on the anchor.
    pub fn apply(self, channel: u8) -> u8 {
        let diff = i32::from(channel) - MIDPOINT;
        let step = diff.abs() / self.divisor();
        let v = self.anchor() + diff.signum() * step;
        // Anchors and divisors keep v within [26, 255].
        v.clamp(0, 255) as u8
    }

    /// Applies the variant to every channel.
    pub fn apply_rgb(self, c: Rgb) -> Rgb {
        c.map(|ch| self.apply(ch))
    }
}

/// Wraps a hue in degrees into [0, 360).
///
/// This is a true modulo, so 360 maps to 0 and overshoots of any size wrap.
pub fn fix_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Darker companion of a color: every channel scaled by 0.75, floored.
pub fn second_color(c: Rgb) -> Rgb {
    c.map(|ch| (u16::from(ch) * 3 / 4) as u8)
}

/// Draws 6 independent hex digits, most significant first.
pub fn random_rgb(rng: &mut impl RandomSource) -> Rgb {
    let mut byte = || {
        let hi = rng.next_index(16) as u8;
        let lo = rng.next_index(16) as u8;
        hi * 16 + lo
    };
    let r = byte();
    let g = byte();
    let b = byte();
    Rgb { r, g, b }
}

/// [`random_rgb`] as 6 uppercase hex digits, e.g. `"3FA90C"`.
pub fn random_hex_color(rng: &mut impl RandomSource) -> String {
    random_rgb(rng).to_hex()
}
