//! SCSS overrides emitter: top-level scalar variables for a scale.
//!
//! The header records the source path and generation time.  Those lines
//! are informational only — idempotence of generated output is judged
//! ignoring `// Last updated:` lines (see [`semantic_lines`]).

use std::fmt::Write as _;

use crate::domain::{TypeScale, units::fmt_magnitude};

/// Name of the generated overrides partial inside a scale's style directory.
pub const OVERRIDES_FILE: &str = "_vanilla-settings-automated-overrides.scss";

const TIMESTAMP_PREFIX: &str = "// Last updated:";

/// Emit the overrides partial for a scale.
///
/// `source` is the token-source path recorded in the header; `timestamp`
/// is a preformatted generation time (the caller owns the clock).
pub fn emit(scale: &TypeScale, source: &str, timestamp: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// ============================================================================="
    );
    let _ = writeln!(
        out,
        "// AUTOMATED VANILLA SETTINGS OVERRIDES - {}",
        scale.name.to_uppercase()
    );
    let _ = writeln!(
        out,
        "// ============================================================================="
    );
    let _ = writeln!(out, "// Auto-generated from {source}");
    let _ = writeln!(out, "// Do not edit manually - changes will be overwritten");
    let _ = writeln!(out, "{TIMESTAMP_PREFIX} {timestamp}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "$baseline-unit: {}rem;",
        fmt_magnitude(scale.baseline_unit.rem())
    );
    if let Some(font) = &scale.font {
        let _ = writeln!(out, "$font-family: \"{font}\";");
    }
    out
}

/// The semantically meaningful lines of a generated file: everything except
/// the timestamp header line.
pub fn semantic_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.starts_with(TIMESTAMP_PREFIX))
        .collect()
}
