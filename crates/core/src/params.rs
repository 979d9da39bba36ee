//! Lenient extraction of numeric settings from a `serde_json::Value` object.
//!
//! A missing key, a non-numeric value, or a non-object input all yield the
//! default. Range checking is left to the caller.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}
