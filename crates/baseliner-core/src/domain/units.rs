//! Unit normalization for token values.
//!
//! Token sources express magnitudes either as bare numbers (already in
//! canonical rem units) or as `"<n>rem"` strings.  [`Scalar`] keeps both
//! the parsed magnitude and the original JSON form so the plugin data blob
//! can round-trip inputs byte-for-byte, while the SCSS/CSS emitters work
//! from the normalized number.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// One rem equals sixteen CSS pixels, by convention.
pub const PX_PER_REM: f64 = 16.0;

/// The original JSON representation of a scalar token field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    /// Bare number, e.g. `1.5`.
    Number(f64),
    /// Unit-suffixed string, e.g. `"1.5rem"`.
    Text(String),
}

/// A normalized rem magnitude plus its raw source form.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    rem: f64,
    raw: RawScalar,
}

impl Scalar {
    /// Normalize a raw field into a canonical rem magnitude.
    ///
    /// Bare numbers pass through; `"<n>rem"` strings are stripped and
    /// parsed.  Anything else is an [`DomainError::InvalidTokenValue`] —
    /// never a silent NaN.
    pub fn parse(
        raw: RawScalar,
        identifier: &str,
        field: &'static str,
    ) -> Result<Self, DomainError> {
        let rem = match &raw {
            RawScalar::Number(n) if n.is_finite() => *n,
            RawScalar::Number(n) => {
                return Err(DomainError::InvalidTokenValue {
                    identifier: identifier.to_string(),
                    field,
                    value: n.to_string(),
                });
            }
            RawScalar::Text(s) => {
                let trimmed = s.trim();
                let prefix = trimmed.strip_suffix("rem").unwrap_or(trimmed);
                // f64::from_str accepts "nan"/"inf"/"infinity"; those must
                // not slip into the generated stylesheets as magnitudes.
                match prefix.trim().parse::<f64>() {
                    Ok(n) if n.is_finite() => n,
                    _ => {
                        return Err(DomainError::InvalidTokenValue {
                            identifier: identifier.to_string(),
                            field,
                            value: s.clone(),
                        });
                    }
                }
            }
        };
        if rem < 0.0 {
            return Err(DomainError::NegativeValue {
                identifier: identifier.to_string(),
                field,
                value: rem,
            });
        }
        Ok(Self { rem, raw })
    }

    /// The canonical rem magnitude.
    pub fn rem(&self) -> f64 {
        self.rem
    }

    /// Pixel conversion: rem × 16, rounded to the nearest integer pixel.
    ///
    /// Used only by the design-tool-plugin path; the SCSS-facing emitters
    /// always stay in rem.
    pub fn px(&self) -> i64 {
        (self.rem * PX_PER_REM).round() as i64
    }

    /// The original source form, for emitters that must round-trip input.
    pub fn raw(&self) -> &RawScalar {
        &self.raw
    }
}

/// Format a rem magnitude the way the generated stylesheets expect:
/// shortest decimal form, no trailing zeros (`2`, `2.5`, `0.75`, `-0.25`).
pub fn fmt_magnitude(value: f64) -> String {
    format!("{value}")
}
