//! SCSS settings-map emitter.
//!
//! One `$settings-text-<id>` map literal per token, with the fixed key set
//! the vanilla framework consumes.  `sp-before` is always 0 — the scale
//! model only carries space *after* an element.

use std::fmt::Write as _;

use crate::domain::{TypeScale, units::fmt_magnitude};

/// Name of the generated settings partial inside a scale's style directory.
pub const SETTINGS_FILE: &str = "_vanilla-text-settings.generated.scss";

/// Emit the settings maps for every token, in declaration order.
pub fn emit(scale: &TypeScale) -> String {
    let mut out = String::from("// This file is auto-generated. Do not edit by hand.\n\n");

    for token in scale.tokens() {
        let _ = writeln!(out, "$settings-text-{}: (", token.identifier);
        let _ = writeln!(out, "  font-size: {}rem,", fmt_magnitude(token.font_size.rem()));
        let _ = writeln!(
            out,
            "  line-height: {}rem,",
            fmt_magnitude(token.line_height.rem())
        );
        let _ = writeln!(out, "  sp-before: 0,");
        let _ = writeln!(
            out,
            "  sp-after: {}rem,",
            fmt_magnitude(token.space_after.rem())
        );
        let _ = writeln!(out, "  nudge: {}rem,", fmt_magnitude(token.nudge_top.rem()));
        let _ = writeln!(out, "  font-weight: {},", token.font_weight.css());
        let _ = writeln!(out, "  font-style: \"{}\",", token.font_style);
        let _ = writeln!(out, ");\n");
    }

    out
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
                "elements": {
                    "h1": { "fontSize": "2rem", "lineHeight": "2.5rem", "spaceAfter": "1rem", "nudgeTop": "0.25rem", "fontWeight": 700 },
                    "p":  { "fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1 }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn emits_one_map_per_token_in_order() {
        let scss = emit(&docs());
        let h1 = scss.find("$settings-text-h1:").unwrap();
        let p = scss.find("$settings-text-p:").unwrap();
        assert!(h1 < p);
    }

    #[test]
    fn map_keys_and_units_are_fixed() {
        let scss = emit(&docs());
        assert!(scss.contains("  font-size: 2rem,"));
        assert!(scss.contains("  line-height: 2.5rem,"));
        assert!(scss.contains("  sp-before: 0,"));
        assert!(scss.contains("  sp-after: 1rem,"));
        assert!(scss.contains("  nudge: 0.25rem,"));
        assert!(scss.contains("  font-weight: 700,"));
        assert!(scss.contains("  font-style: \"normal\","));
    }

    #[test]
    fn emission_is_idempotent() {
        assert_eq!(emit(&docs()), emit(&docs()));
    }
}
