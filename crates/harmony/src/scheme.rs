//! The four palette schemes and their name/index registry.

use colorharmony_core::HarmonyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// All scheme names, in index order.
const SCHEME_NAMES: &[&str] = &["Monochromatic", "Analogous", "Complementary", "Triads"];

/// A color-harmony scheme.
///
/// The discriminant is the legacy scheme index (Monochromatic = 0 .. Triads = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Tonal variants of the base hue.
    Monochromatic = 0,
    /// Base hue plus neighbours at +/-30 degrees and white.
    Analogous = 1,
    /// Base hue, its opposite at +180 degrees, and a light tone of each.
    Complementary = 2,
    /// Base hue plus +/-120 degrees and white.
    Triads = 3,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Monochromatic,
        Scheme::Analogous,
        Scheme::Complementary,
        Scheme::Triads,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a scheme up by its legacy index.
    pub fn from_index(index: usize) -> Result<Self, HarmonyError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| HarmonyError::UnknownScheme(index.to_string()))
    }

    pub fn name(self) -> &'static str {
        SCHEME_NAMES[self.index()]
    }

    /// Looks a scheme up by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, HarmonyError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| HarmonyError::UnknownScheme(name.to_string()))
    }

    /// Returns a slice of all scheme names.
    pub fn list_names() -> &'static [&'static str] {
        SCHEME_NAMES
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Scheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Scheme::from_name(&s).map_err(serde::de::Error::custom)
    }
}
