//! Error types for colorharmony.

use thiserror::Error;

/// Errors produced by color conversion and palette generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarmonyError {
    /// A hex color did not contain exactly 6 digits after stripping `#`.
    #[error("invalid hex color '{0}': expected 6 hex digits")]
    InvalidFormat(String),

    /// A character outside `0-9A-F` (case insensitive) appeared in a hex string.
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),

    /// A numeric component was outside its defined domain.
    #[error("{component} out of range: {value}")]
    OutOfRange { component: String, value: f64 },

    /// Generator bounds were outside [0, 100] or had min > max.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scheme name or index did not match any of the four schemes.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}
