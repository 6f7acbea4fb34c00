//! Baseline-aligned CSS rule emitter.
//!
//! One rule per token, selector equal to the token identifier.  The nudge
//! becomes top padding, the derived margin (`spaceAfter − nudgeTop`) goes
//! below, and top margin is forced to zero so the grid owns all vertical
//! spacing.

use std::fmt::Write as _;

use crate::domain::{TypeScale, units::fmt_magnitude};

/// Name of the generated styles partial inside a scale's style directory.
pub const STYLES_FILE: &str = "_generated-styles.scss";

/// Emit the baseline-aligned rules for every token, in declaration order.
pub fn emit(scale: &TypeScale, timestamp: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// ============================================================================="
    );
    let _ = writeln!(out, "// GENERATED STYLES - {}", scale.name.to_uppercase());
    let _ = writeln!(
        out,
        "// ============================================================================="
    );
    let _ = writeln!(out, "// Do not edit manually - changes will be overwritten");
    let _ = writeln!(out, "// Last updated: {timestamp}");
    let _ = writeln!(out);

    for token in scale.tokens() {
        let _ = writeln!(out, "{} {{", token.identifier);
        let _ = writeln!(out, "  font-size: {}rem;", fmt_magnitude(token.font_size.rem()));
        let _ = writeln!(
            out,
            "  line-height: {}rem;",
            fmt_magnitude(token.line_height.rem())
        );
        let _ = writeln!(out, "  font-weight: {};", token.font_weight.css());
        let _ = writeln!(
            out,
            "  padding-top: {}rem;",
            fmt_magnitude(token.nudge_top.rem())
        );
        let _ = writeln!(
            out,
            "  margin-bottom: {}rem;",
            fmt_magnitude(token.margin_bottom())
        );
        let _ = writeln!(out, "  margin-top: 0;");
        let _ = writeln!(out, "}}\n");
    }

    out
}
