#![deny(unsafe_code)]
//! Color-space conversions for the colorharmony palette generator.
//!
//! Provides the `Rgb` and `Hsl` color types with pure conversions between
//! hexadecimal strings, RGB and HSL, the `HostColor` pack/unpack contract
//! (with the `Argb32` default), the `RandomSource` trait with the `Xorshift64`
//! PRNG, and the `HarmonyError` taxonomy shared by the whole workspace.

pub mod color;
pub mod error;
pub mod host;
pub mod params;
pub mod prng;

pub use color::{
    decimal_to_hex, hex_to_decimal, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex,
    rgb_to_hsl, Hsl, Rgb,
};
pub use error::HarmonyError;
pub use host::{hex_to_packed, packed_to_hex, Argb32, HostColor};
pub use prng::{RandomSource, Xorshift64};
