//! The host packed-color collaborator.
//!
//! Palettes are handed back to the embedding environment in whatever packed
//! form it draws with. The core only relies on the pack/unpack contract below
//! and never inspects the packed bits itself.

use crate::color::{hex_to_rgb, Rgb};
use crate::error::HarmonyError;

/// Packs 8-bit channels into a host color value and back.
///
/// `unpack(pack(c))` must return `c` for every `c`.
pub trait HostColor {
    /// The host's opaque color value.
    type Packed: Copy + std::fmt::Debug + PartialEq;

    fn pack(&self, rgb: Rgb) -> Self::Packed;

    fn unpack(&self, packed: &Self::Packed) -> Rgb;
}

/// Opaque 32-bit ARGB packing (`0xFFRRGGBB`).
///
/// This is the layout used by sketching environments that store colors as a
/// single integer with alpha in the top byte. Alpha is always fully opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Argb32;

impl Argb32 {
    const OPAQUE: u32 = 0xFF00_0000;
}

impl HostColor for Argb32 {
    type Packed = u32;

    fn pack(&self, rgb: Rgb) -> u32 {
        Self::OPAQUE | (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b)
    }

    fn unpack(&self, packed: &u32) -> Rgb {
        let [_, r, g, b] = packed.to_be_bytes();
        Rgb { r, g, b }
    }
}

/// Parses a hex color and packs it for the host.
pub fn hex_to_packed<H: HostColor>(host: &H, hex: &str) -> Result<H::Packed, HarmonyError> {
    hex_to_rgb(hex).map(|rgb| host.pack(rgb))
}

/// Unpacks a host color into a 6-digit uppercase hex string.
pub fn packed_to_hex<H: HostColor>(host: &H, packed: &H::Packed) -> String {
    host.unpack(packed).to_hex()
}
