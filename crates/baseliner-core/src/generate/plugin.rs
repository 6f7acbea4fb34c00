//! Design-tool plugin emitters.
//!
//! Two contracts live here:
//! - the embedded data blob spliced into the plugin's UI script
//!   ([`emit_blob`]), which round-trips raw source values untouched, and
//! - the `generate-components` message the plugin UI sends to its canvas
//!   runtime ([`GenerateComponentsRequest`]), which is pre-normalized to
//!   integer pixels and a fixed-width container.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::font::{FALLBACK_FAMILIES, style_candidates};
use crate::domain::{FontWeight, RawScalar, TypeScale, TypeToken};

/// Fixed width of the generated component container, in pixels.
pub const CONTAINER_WIDTH_PX: u32 = 800;

/// The statement prefix the plugin bridge splices on.
pub const BLOB_MARKER: &str = "const TOKENS_DATA = {";

// ── data blob ─────────────────────────────────────────────────────────────────

/// Emit the multi-scale data blob as the literal statement embedded in the
/// plugin UI script.
///
/// Scales and elements appear in the order given; scalar values keep their
/// raw source form (`"2rem"` stays a string, `2` stays a number).
pub fn emit_blob(scales: &[TypeScale]) -> String {
    let mut root = Map::new();
    for scale in scales {
        let mut elements = Map::new();
        for token in scale.tokens() {
            elements.insert(token.identifier.clone(), element_value(token));
        }
        root.insert(
            scale.name.clone(),
            json!({
                "baselineUnit": raw_value(scale.baseline_unit.raw()),
                "elements": Value::Object(elements),
            }),
        );
    }
    let body = serde_json::to_string_pretty(&Value::Object(root))
        .expect("token data is always serializable");
    format!("const TOKENS_DATA = {body};")
}

fn element_value(token: &TypeToken) -> Value {
    json!({
        "fontSize": raw_value(token.font_size.raw()),
        "lineHeight": raw_value(token.line_height.raw()),
        "fontWeight": weight_value(&token.font_weight),
        "fontStyle": token.font_style,
        "spaceAfter": raw_value(token.space_after.raw()),
        "nudgeTop": raw_value(token.nudge_top.raw()),
    })
}

fn raw_value(raw: &RawScalar) -> Value {
    match raw {
        RawScalar::Number(n) => json!(n),
        RawScalar::Text(s) => Value::String(s.clone()),
    }
}

fn weight_value(weight: &FontWeight) -> Value {
    match weight {
        FontWeight::Numeric(w) => json!(w),
        FontWeight::Named(s) => Value::String(s.clone()),
    }
}

// ── generate-components message ───────────────────────────────────────────────

/// The message the plugin UI sends when the user asks for components.
///
/// All magnitudes are pre-normalized to integer pixels; the canvas side
/// never sees rem values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComponentsRequest {
    pub scale: String,
    pub baseline_unit_px: i64,
    /// Families the runtime tries in order: the scale's own font first,
    /// then the stock fallbacks.
    pub font_family_candidates: Vec<String>,
    pub container_width_px: u32,
    pub elements: Vec<ComponentElement>,
}

/// One element of a `generate-components` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentElement {
    pub identifier: String,
    pub font_size_px: i64,
    pub line_height_px: i64,
    pub padding_top_px: i64,
    pub padding_bottom_px: i64,
    pub font_weight: String,
    pub font_style: String,
    /// Named-style candidates the runtime tries in order when loading the
    /// font (font files disagree about style naming).
    pub style_candidates: Vec<String>,
}

impl GenerateComponentsRequest {
    /// Build the request for a scale, converting every magnitude to pixels.
    pub fn from_scale(scale: &TypeScale) -> Self {
        let mut families: Vec<String> = Vec::with_capacity(1 + FALLBACK_FAMILIES.len());
        if let Some(font) = &scale.font {
            families.push(font.clone());
        }
        families.extend(
            FALLBACK_FAMILIES
                .iter()
                .filter(|f| Some(**f) != scale.font.as_deref())
                .map(|f| f.to_string()),
        );

        Self {
            scale: scale.name.clone(),
            baseline_unit_px: scale.baseline_unit.px(),
            font_family_candidates: families,
            container_width_px: CONTAINER_WIDTH_PX,
            elements: scale
                .tokens()
                .iter()
                .map(|token| ComponentElement {
                    identifier: token.identifier.clone(),
                    font_size_px: token.font_size.px(),
                    line_height_px: token.line_height.px(),
                    padding_top_px: token.nudge_top.px(),
                    padding_bottom_px: token.space_after.px() - token.nudge_top.px(),
                    font_weight: token.font_weight.css(),
                    font_style: token.font_style.clone(),
                    style_candidates: named_style_candidates(&token.font_weight),
                })
                .collect(),
        }
    }
}

/// Ordered named-style candidates for a token's weight.
///
/// Numeric weights expand to the conventional degradation chain starting
/// at the canonical name; a named weight is tried as-is, falling back to
/// "Regular".
fn named_style_candidates(weight: &FontWeight) -> Vec<String> {
    match weight {
        FontWeight::Named(name) if name != "Regular" => {
            vec![name.clone(), "Regular".to_string()]
        }
        FontWeight::Named(name) => vec![name.clone()],
        FontWeight::Numeric(w) => {
            style_candidates(*w).iter().map(|c| c.to_string()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TypeScale;

    fn docs() -> TypeScale {
        TypeScale::parse(
            "docs",
            r#"{
                "baselineUnit": "0.5rem",
                "font": "Inter",
                "elements": {
                    "h1": { "fontSize": "2rem", "lineHeight": "2.5rem", "spaceAfter": "1rem", "nudgeTop": "0.25rem", "fontWeight": 700 },
                    "p":  { "fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1 }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn blob_round_trips_raw_values() {
        let blob = emit_blob(&[docs()]);
        let json: Value = serde_json::from_str(
            blob.trim_start_matches("const TOKENS_DATA = ").trim_end_matches(';'),
        )
        .unwrap();
        let h1 = &json["docs"]["elements"]["h1"];
        assert_eq!(h1["fontSize"], json!("2rem"));
        assert_eq!(h1["lineHeight"], json!("2.5rem"));
        assert_eq!(h1["fontWeight"], json!(700));
        assert_eq!(h1["fontStyle"], json!("normal"));
        assert_eq!(h1["spaceAfter"], json!("1rem"));
        assert_eq!(h1["nudgeTop"], json!("0.25rem"));
        // bare numbers stay numbers
        assert_eq!(json["docs"]["elements"]["p"]["fontSize"], json!(1.0));
    }

    #[test]
    fn blob_is_a_spliceable_statement() {
        let blob = emit_blob(&[docs()]);
        assert!(blob.starts_with(BLOB_MARKER));
        assert!(blob.ends_with("};"));
    }

    #[test]
    fn blob_preserves_scale_and_element_order() {
        let editorial = TypeScale::parse(
            "editorial",
            r#"{"baselineUnit": 0.5, "elements": {"p": {"fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1}}}"#,
        )
        .unwrap();
        let blob = emit_blob(&[docs(), editorial]);
        let docs_at = blob.find("\"docs\"").unwrap();
        let editorial_at = blob.find("\"editorial\"").unwrap();
        assert!(docs_at < editorial_at);
        let h1 = blob.find("\"h1\"").unwrap();
        let p = blob.find("\"p\"").unwrap();
        assert!(h1 < p);
    }

    #[test]
    fn request_is_pixel_normalized() {
        let request = GenerateComponentsRequest::from_scale(&docs());
        assert_eq!(request.baseline_unit_px, 8);
        assert_eq!(request.container_width_px, CONTAINER_WIDTH_PX);
        let h1 = &request.elements[0];
        assert_eq!(h1.font_size_px, 32);
        assert_eq!(h1.line_height_px, 40);
        assert_eq!(h1.padding_top_px, 4);
        assert_eq!(h1.padding_bottom_px, 12);
    }

    #[test]
    fn request_carries_font_fallback_policy() {
        let request = GenerateComponentsRequest::from_scale(&docs());
        // configured family first, not repeated among the fallbacks
        assert_eq!(request.font_family_candidates[0], "Inter");
        assert_eq!(
            request
                .font_family_candidates
                .iter()
                .filter(|f| *f == "Inter")
                .count(),
            1
        );
        let h1 = &request.elements[0]; // weight 700
        assert_eq!(h1.style_candidates, ["Bold", "SemiBold", "Medium"]);
        let p = &request.elements[1]; // defaulted weight 400
        assert_eq!(p.style_candidates, ["Regular", "Normal"]);
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateComponentsRequest::from_scale(&docs());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("baselineUnitPx").is_some());
        assert!(json["elements"][0].get("fontSizePx").is_some());
    }
}
