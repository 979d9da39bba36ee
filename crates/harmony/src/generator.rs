//! Stateless palette generation.
//!
//! Every scheme produces 8 colors in a fixed role order. Roles 1 to 4 are the
//! primary tones, with role 1 always the corrected base color. Roles 5 to 8
//! are the [`second_color`] of roles 1 to 4 respectively.
//!
//! | Scheme        | Role 2              | Role 3              | Role 4              |
//! |---------------|---------------------|---------------------|---------------------|
//! | Monochromatic | `Light` corrected   | `Dark` corrected    | `Pale` corrected    |
//! | Analogous     | hue + 30            | white               | hue - 30            |
//! | Complementary | hue + 180           | `Light` of role 1   | `Light` of role 2   |
//! | Triads        | hue + 120           | white               | hue - 120           |

use crate::config::HarmonyConfig;
use crate::scheme::Scheme;
use crate::tone::{fix_hue, random_rgb, second_color, Tone};
use colorharmony_core::{
    hex_to_rgb, hsl_to_rgb, rgb_to_hsl, Argb32, HarmonyError, HostColor, Hsl, RandomSource, Rgb,
};
use serde::Serialize;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 8;

/// Where a palette's base color comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseColor<'a, P> {
    /// Six random hex digits.
    Random,
    /// A hex string like `"#FF00AA"`.
    Hex(&'a str),
    /// A color already packed by the host.
    Packed(P),
}

/// A generated palette.
///
/// Carries the scheme and corrected base color alongside the colors, so
/// callers never need to ask the generator what it did last.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette<P> {
    scheme: Scheme,
    base_color: String,
    hex: [String; PALETTE_SIZE],
    #[serde(skip)]
    colors: [P; PALETTE_SIZE],
}

impl<P> Palette<P> {
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn scheme_name(&self) -> &'static str {
        self.scheme.name()
    }

    /// The corrected base color (role 1) as 6 uppercase hex digits.
    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    /// Every role as 6 uppercase hex digits.
    pub fn hex(&self) -> &[String; PALETTE_SIZE] {
        &self.hex
    }

    /// Every role packed for the host.
    pub fn colors(&self) -> &[P; PALETTE_SIZE] {
        &self.colors
    }

    pub fn into_colors(self) -> [P; PALETTE_SIZE] {
        self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: palettes have a fixed size.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<'a, P> IntoIterator for &'a Palette<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Produces palettes from a base color.
///
/// Holds only the immutable [`HarmonyConfig`] and the host collaborator, so
/// a single generator can be shared across threads. Randomness is passed in
/// per call.
#[derive(Debug, Clone, Default)]
pub struct PaletteGenerator<H = Argb32> {
    config: HarmonyConfig,
    host: H,
}

impl PaletteGenerator<Argb32> {
    /// Creates a generator that packs colors as `0xFFRRGGBB`.
    pub fn new(config: HarmonyConfig) -> Self {
        Self::with_host(config, Argb32)
    }
}

impl<H: HostColor> PaletteGenerator<H> {
    pub fn with_host(config: HarmonyConfig, host: H) -> Self {
        Self { config, host }
    }

    pub fn config(&self) -> &HarmonyConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Generates a palette from a hex base color.
    ///
    /// Invalid hex is reported, never replaced with a default color.
    pub fn generate(&self, scheme: Scheme, hex: &str) -> Result<Palette<H::Packed>, HarmonyError> {
        let base = hex_to_rgb(hex)?;
        Ok(self.build(scheme, base))
    }

    /// Generates a palette from a host-packed base color.
    pub fn generate_packed(&self, scheme: Scheme, packed: &H::Packed) -> Palette<H::Packed> {
        self.build(scheme, self.host.unpack(packed))
    }

    /// Generates a palette from a random base color.
    pub fn generate_random(
        &self,
        scheme: Scheme,
        rng: &mut impl RandomSource,
    ) -> Palette<H::Packed> {
        self.build(scheme, random_rgb(rng))
    }

    /// Dispatches on where the base color comes from.
    pub fn generate_from(
        &self,
        scheme: Scheme,
        base: BaseColor<'_, H::Packed>,
        rng: &mut impl RandomSource,
    ) -> Result<Palette<H::Packed>, HarmonyError> {
        match base {
            BaseColor::Random => Ok(self.generate_random(scheme, rng)),
            BaseColor::Hex(hex) => self.generate(scheme, hex),
            BaseColor::Packed(packed) => Ok(self.generate_packed(scheme, &packed)),
        }
    }

    /// Picks a random scheme, then a random base color.
    pub fn generate_random_palette(&self, rng: &mut impl RandomSource) -> Palette<H::Packed> {
        let scheme = Scheme::ALL[rng.next_index(Scheme::ALL.len())];
        self.generate_random(scheme, rng)
    }

    /// Clamps a hex color's saturation and luminosity into the configured bounds.
    pub fn correct_color_hex(&self, hex: &str) -> Result<String, HarmonyError> {
        hex_to_rgb(hex).map(|c| self.correct_color(c).to_hex())
    }

    /// Clamps saturation and luminosity into the configured bounds.
    ///
    /// Both checks read the same initial HSL. When luminosity needs clamping
    /// the result is rebuilt from the original saturation, discarding any
    /// saturation clamp. A color already inside both bounds is returned
    /// unchanged, without an HSL round trip.
    ///
    /// Bounds are narrowed to `f32` to match the HSL conversions.
    pub fn correct_color(&self, c: Rgb) -> Rgb {
        let hsl = rgb_to_hsl(c);
        let cfg = &self.config;
        let (min_s, max_s) = (cfg.min_saturation() as f32, cfg.max_saturation() as f32);
        let (min_l, max_l) = (cfg.min_luminosity() as f32, cfg.max_luminosity() as f32);
        let mut out = c;

        if hsl.s > max_s {
            out = hsl_to_rgb(Hsl { s: max_s, ..hsl });
        } else if hsl.s < min_s {
            out = hsl_to_rgb(Hsl { s: min_s, ..hsl });
        }

        if hsl.l > max_l {
            out = hsl_to_rgb(Hsl { l: max_l, ..hsl });
        } else if hsl.l < min_l {
            out = hsl_to_rgb(Hsl { l: min_l, ..hsl });
        }

        if out != c {
            tracing::trace!(from = %c.to_hex(), to = %out.to_hex(), "corrected color");
        }
        out
    }

    fn build(&self, scheme: Scheme, base: Rgb) -> Palette<H::Packed> {
        let base = self.correct_color(base);

        let primaries = match scheme {
            Scheme::Monochromatic => [
                base,
                self.correct_color(Tone::Light.apply_rgb(base)),
                self.correct_color(Tone::Dark.apply_rgb(base)),
                self.correct_color(Tone::Pale.apply_rgb(base)),
            ],
            Scheme::Analogous => flanked_by_white(base, 30.0),
            Scheme::Complementary => {
                let opposite = rotate_hue(base, 180.0);
                [
                    base,
                    opposite,
                    Tone::Light.apply_rgb(base),
                    Tone::Light.apply_rgb(opposite),
                ]
            }
            Scheme::Triads => flanked_by_white(base, 120.0),
        };

        let roles: [Rgb; PALETTE_SIZE] = std::array::from_fn(|i| match i {
            0..=3 => primaries[i],
            _ => second_color(primaries[i - 4]),
        });

        let palette = Palette {
            scheme,
            base_color: base.to_hex(),
            hex: roles.map(Rgb::to_hex),
            colors: roles.map(|c| self.host.pack(c)),
        };
        tracing::debug!(
            scheme = %scheme,
            base = %palette.base_color,
            "generated palette"
        );
        palette
    }
}

/// Same saturation and luminosity, hue shifted by `degrees`.
fn rotate_hue(c: Rgb, degrees: f32) -> Rgb {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(Hsl {
        h: fix_hue(hsl.h + degrees),
        ..hsl
    })
}

/// `[base, base + offset, white, base - offset]`.
fn flanked_by_white(base: Rgb, offset: f32) -> [Rgb; 4] {
    [
        base,
        rotate_hue(base, offset),
        Rgb::WHITE,
        rotate_hue(base, -offset),
    ]
}
