//! The token model: [`TypeToken`] and [`TypeScale`].
//!
//! A scale is loaded once per build pass from its token-source JSON file
//! and is immutable for the duration of that pass.  A changed source file
//! produces a whole new `TypeScale` — never a partial patch.
//!
//! Token order matters: generated SCSS/CSS rule order affects cascade
//! semantics, so `elements` is deserialized preserving the declaration
//! order of the source document.

use serde::Deserialize;

use super::error::DomainError;
use super::units::{RawScalar, Scalar};

/// Font weight as declared in the source: numeric (100–900 by convention)
/// or a named style string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u16),
    Named(String),
}

impl FontWeight {
    /// CSS-facing form: bare number or bare keyword.
    pub fn css(&self) -> String {
        match self {
            Self::Numeric(w) => w.to_string(),
            Self::Named(s) => s.clone(),
        }
    }

    /// Numeric weight if there is one.
    pub fn numeric(&self) -> Option<u16> {
        match self {
            Self::Numeric(w) => Some(*w),
            Self::Named(_) => None,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Numeric(400)
    }
}

/// One typographic element: a heading level, paragraph style, etc.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeToken {
    pub identifier: String,
    pub font_size: Scalar,
    pub line_height: Scalar,
    pub space_after: Scalar,
    pub nudge_top: Scalar,
    pub font_weight: FontWeight,
    pub font_style: String,
}

impl TypeToken {
    /// Derived bottom margin: `spaceAfter − nudgeTop`.
    ///
    /// May be negative — that is visual overlap compensation, not an
    /// error, and must be preserved unclamped.
    pub fn margin_bottom(&self) -> f64 {
        self.space_after.rem() - self.nudge_top.rem()
    }
}

/// A named, ordered collection of tokens sharing one baseline grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScale {
    pub name: String,
    pub baseline_unit: Scalar,
    pub font: Option<String>,
    tokens: Vec<TypeToken>,
}

impl TypeScale {
    /// Parse a token-source JSON document into a scale.
    ///
    /// Shape: `{ baselineUnit, font?, elements: { id: { fontSize,
    /// lineHeight, fontWeight?, fontStyle?, spaceAfter, nudgeTop? } } }`.
    pub fn parse(name: &str, source: &str) -> Result<Self, DomainError> {
        let raw: RawSource =
            serde_json::from_str(source).map_err(|e| DomainError::InvalidSource {
                scale: name.to_string(),
                reason: e.to_string(),
            })?;

        if raw.elements.is_empty() {
            return Err(DomainError::EmptyScale {
                scale: name.to_string(),
            });
        }

        let mut tokens = Vec::with_capacity(raw.elements.len());
        for (identifier, element) in raw.elements {
            if tokens
                .iter()
                .any(|t: &TypeToken| t.identifier == identifier)
            {
                return Err(DomainError::DuplicateIdentifier {
                    scale: name.to_string(),
                    identifier,
                });
            }
            tokens.push(element.into_token(identifier)?);
        }

        Ok(Self {
            name: name.to_string(),
            baseline_unit: Scalar::parse(raw.baseline_unit, name, "baselineUnit")?,
            font: raw.font,
            tokens,
        })
    }

    /// Tokens in source-declaration order.
    pub fn tokens(&self) -> &[TypeToken] {
        &self.tokens
    }
}

// ── raw wire shapes ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSource {
    baseline_unit: RawScalar,
    #[serde(default)]
    font: Option<String>,
    #[serde(default, deserialize_with = "ordered_elements")]
    elements: Vec<(String, RawElement)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawElement {
    font_size: RawScalar,
    line_height: RawScalar,
    #[serde(default)]
    font_weight: Option<FontWeight>,
    #[serde(default)]
    font_style: Option<String>,
    space_after: RawScalar,
    #[serde(default)]
    nudge_top: Option<RawScalar>,
}

impl RawElement {
    fn into_token(self, identifier: String) -> Result<TypeToken, DomainError> {
        let nudge_top = match self.nudge_top {
            Some(raw) => Scalar::parse(raw, &identifier, "nudgeTop")?,
            None => Scalar::parse(RawScalar::Number(0.0), &identifier, "nudgeTop")?,
        };
        Ok(TypeToken {
            font_size: Scalar::parse(self.font_size, &identifier, "fontSize")?,
            line_height: Scalar::parse(self.line_height, &identifier, "lineHeight")?,
            space_after: Scalar::parse(self.space_after, &identifier, "spaceAfter")?,
            nudge_top,
            font_weight: self.font_weight.unwrap_or_default(),
            font_style: self.font_style.unwrap_or_else(|| "normal".to_string()),
            identifier,
        })
    }
}

/// Deserialize a JSON object as a vector of entries in document order.
///
/// A plain `HashMap` would lose the declaration order that the emitters
/// depend on.
fn ordered_elements<'de, D>(deserializer: D) -> Result<Vec<(String, RawElement)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct OrderedVisitor;

    impl<'de> serde::de::Visitor<'de> for OrderedVisitor {
        type Value = Vec<(String, RawElement)>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of element identifiers to token definitions")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, RawElement>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor)
}
