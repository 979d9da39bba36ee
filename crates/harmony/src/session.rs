//! A generator that remembers its last palette.
//!
//! [`PaletteGenerator`] returns the scheme and base color with every palette.
//! `HarmonySession` layers the older "ask what was generated last" style on
//! top, owning its own random source. Mutating calls take `&mut self`, so
//! sharing one session across threads needs a lock around it.

use crate::config::HarmonyConfig;
use crate::generator::{BaseColor, Palette, PaletteGenerator};
use crate::scheme::Scheme;
use colorharmony_core::{Argb32, HarmonyError, HostColor, RandomSource, Xorshift64};

/// Scheme and corrected base color of the most recent palette.
#[derive(Debug, Clone, PartialEq)]
struct LastPalette {
    scheme: Scheme,
    base_color: String,
}

/// Palette generator with a random source and a record of its last output.
#[derive(Debug, Clone)]
pub struct HarmonySession<H = Argb32, R = Xorshift64> {
    generator: PaletteGenerator<H>,
    rng: R,
    last: Option<LastPalette>,
}

impl HarmonySession<Argb32, Xorshift64> {
    /// Session with `0xFFRRGGBB` packing and a seeded `Xorshift64`.
    pub fn seeded(config: HarmonyConfig, seed: u64) -> Self {
        Self::new(PaletteGenerator::new(config), Xorshift64::new(seed))
    }
}

impl<H: HostColor, R: RandomSource> HarmonySession<H, R> {
    pub fn new(generator: PaletteGenerator<H>, rng: R) -> Self {
        Self {
            generator,
            rng,
            last: None,
        }
    }

    pub fn generator(&self) -> &PaletteGenerator<H> {
        &self.generator
    }

    /// Generates a palette and records its scheme and base color.
    ///
    /// On error nothing is recorded; the previous palette stays current.
    pub fn generate(
        &mut self,
        scheme: Scheme,
        base: BaseColor<'_, H::Packed>,
    ) -> Result<Palette<H::Packed>, HarmonyError> {
        let palette = self.generator.generate_from(scheme, base, &mut self.rng)?;
        self.remember(&palette);
        Ok(palette)
    }

    pub fn monochromatic(
        &mut self,
        base: BaseColor<'_, H::Packed>,
    ) -> Result<Palette<H::Packed>, HarmonyError> {
        self.generate(Scheme::Monochromatic, base)
    }

    pub fn analogous(
        &mut self,
        base: BaseColor<'_, H::Packed>,
    ) -> Result<Palette<H::Packed>, HarmonyError> {
        self.generate(Scheme::Analogous, base)
    }

    pub fn complementary(
        &mut self,
        base: BaseColor<'_, H::Packed>,
    ) -> Result<Palette<H::Packed>, HarmonyError> {
        self.generate(Scheme::Complementary, base)
    }

    pub fn triads(
        &mut self,
        base: BaseColor<'_, H::Packed>,
    ) -> Result<Palette<H::Packed>, HarmonyError> {
        self.generate(Scheme::Triads, base)
    }

    /// Random scheme with a random base color.
    pub fn random_palette(&mut self) -> Palette<H::Packed> {
        let palette = self.generator.generate_random_palette(&mut self.rng);
        self.remember(&palette);
        palette
    }

    /// Scheme of the last palette, `None` before the first one.
    pub fn current_scheme(&self) -> Option<Scheme> {
        self.last.as_ref().map(|l| l.scheme)
    }

    pub fn current_scheme_name(&self) -> Option<&'static str> {
        self.current_scheme().map(Scheme::name)
    }

    /// Corrected base color of the last palette as 6 uppercase hex digits.
    pub fn current_base_color(&self) -> Option<&str> {
        self.last.as_ref().map(|l| l.base_color.as_str())
    }

    fn remember(&mut self, palette: &Palette<H::Packed>) {
        self.last = Some(LastPalette {
            scheme: palette.scheme(),
            base_color: palette.base_color().to_string(),
        });
    }
}
