#![deny(unsafe_code)]
//! Harmonized 8-color palettes from a single base color.
//!
//! Four schemes are available (`Monochromatic`, `Analogous`, `Complementary`,
//! `Triads`). [`PaletteGenerator`] is stateless and returns a [`Palette`]
//! carrying its scheme and corrected base color; [`HarmonySession`] wraps it
//! with a random source and remembers the last palette produced.
//!
//! Color conversions live in `colorharmony-core` and are re-exported here.

pub mod config;
pub mod generator;
pub mod scheme;
pub mod session;
pub mod tone;

pub use colorharmony_core::{
    color, host, Argb32, HarmonyError, HostColor, Hsl, RandomSource, Rgb, Xorshift64,
};
pub use config::HarmonyConfig;
pub use generator::{BaseColor, Palette, PaletteGenerator, PALETTE_SIZE};
pub use scheme::Scheme;
pub use session::HarmonySession;
