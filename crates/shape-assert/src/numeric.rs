//! Canonical numeric values for cross-representation equality.
//!
//! Every numeric kind renders to locale-invariant decimal text at full
//! precision: integers through `Display`, floats through the shortest
//! round-trip `Display` (which never switches to exponent notation), and
//! decimals after normalisation strips trailing fractional zeros. Two values
//! are equal iff their texts are, so `1_i32`, `1_i64`, `1.0_f64` and
//! `Decimal::new(10, 1)` all compare equal while `1.1_f64` stays distinct.

use std::fmt;

use rust_decimal::Decimal;

use crate::reflect::Reflect;

#[cfg(test)]
mod tests;

/// A numeric operand reduced to its canonical decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalNumeric {
    text: String,
}

impl CanonicalNumeric {
    /// Canonical form of an integer of any width.
    pub fn from_integer(value: impl fmt::Display) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    /// Canonical form of a single-precision float.
    ///
    /// Rendered at `f32` precision so that `1.1_f32` reads `1.1` rather than
    /// the widened `1.100000023841858`.
    pub fn from_f32(value: f32) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    /// Canonical form of a double-precision float.
    pub fn from_f64(value: f64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    /// Canonical form of a decimal; trailing fractional zeros are dropped.
    pub fn from_decimal(value: Decimal) -> Self {
        let normalized = value.normalize();
        let text = if normalized.is_zero() {
            "0".to_owned()
        } else {
            normalized.to_string()
        };
        Self { text }
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CanonicalNumeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Canonicalizes a runtime value.
///
/// Returns `None` for null values and for values whose runtime type is not a
/// numeric kind.
pub fn canonicalize(value: &dyn Reflect) -> Option<CanonicalNumeric> {
    if value.is_null() {
        return None;
    }
    value.canonical_number()
}
