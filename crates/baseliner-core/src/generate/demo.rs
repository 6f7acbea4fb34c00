//! Demo-page emitter.
//!
//! A demo page references a scale's compiled CSS and shows every token
//! once over a toggleable baseline-grid overlay.  A user-authored template
//! always wins verbatim; the synthesized default exists only so a fresh
//! scale has something to look at.
//!
//! The emitter itself is pure — the "don't overwrite an existing demo"
//! rule is enforced by the pipeline, which owns the filesystem.

use std::fmt::Write as _;

use crate::domain::{TypeScale, TypeToken};

/// Generated demo file name for a scale.
pub fn demo_file_name(scale_name: &str) -> String {
    format!("typography-{scale_name}.html")
}

/// Synthesize the default demo document for a scale.
///
/// `css_href` is the relative href from the demo directory to the compiled
/// stylesheet.
pub fn emit(scale: &TypeScale, css_href: &str) -> String {
    let title = title_case(&scale.name);
    let mut body = String::new();
    for token in scale.tokens() {
        let _ = writeln!(body, "            <hr>");
        let _ = writeln!(
            body,
            "            <{id}>{text}</{id}>",
            id = token.identifier,
            text = sample_text(&scale.name, token),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Typography Demo - {title}</title>
    <link rel="stylesheet" href="{css_href}">
    <style>
        body {{
            margin: 0;
        }}
        .demo-container {{
            max-width: 800px;
            margin: 0 auto;
            position: relative;
        }}
        .content {{
            position: relative;
            z-index: 2;
        }}
        .toggle-grid {{
            position: fixed;
            top: 1rem;
            right: 1rem;
            z-index: 1000;
            padding: 0.5rem 1rem;
            background: #333;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }}
        .toggle-grid:hover {{
            background: #555;
        }}
    </style>
</head>
<body class="u-baseline-grid">
    <button class="toggle-grid" onclick="toggleGrid()">Toggle Baseline Grid</button>

    <div class="demo-container">
        <div class="content">
{body}        </div>
    </div>

    <script>
        function toggleGrid() {{
            document.body.classList.toggle('u-baseline-grid');
        }}
    </script>
</body>
</html>
"#
    )
}

fn sample_text(scale_name: &str, token: &TypeToken) -> String {
    format!(
        "The {id} style of the {scale_name} type scale, aligned to the baseline grid.",
        id = token.identifier,
    )
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
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
                "baselineUnit": 0.5,
                "elements": {
                    "h1": { "fontSize": 2, "lineHeight": 2.5, "spaceAfter": 1 },
                    "h2": { "fontSize": 1.5, "lineHeight": 2, "spaceAfter": 1 },
                    "p":  { "fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1 }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn exercises_every_token_once() {
        let html = emit(&docs(), "../css/docs.css");
        for id in ["h1", "h2", "p"] {
            assert_eq!(html.matches(&format!("<{id}>")).count(), 1, "{id}");
        }
    }

    #[test]
    fn references_the_compiled_css() {
        let html = emit(&docs(), "../css/docs.css");
        assert!(html.contains(r#"<link rel="stylesheet" href="../css/docs.css">"#));
    }

    #[test]
    fn carries_the_grid_toggle() {
        let html = emit(&docs(), "x.css");
        assert!(html.contains("toggleGrid()"));
        assert!(html.contains("u-baseline-grid"));
    }

    #[test]
    fn demo_file_name_follows_convention() {
        assert_eq!(demo_file_name("docs"), "typography-docs.html");
    }
}
