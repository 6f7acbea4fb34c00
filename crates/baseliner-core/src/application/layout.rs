//! Path conventions of the fan-out topology.
//!
//! Every artifact path in the pipeline is derived from one [`PathLayout`]:
//!
//! ```text
//! <config_dir>/typography-config-<scale>.json      token source (input)
//! <styles_root>/<scale>/main.scss                  user-authored entry point
//! <styles_root>/<scale>/_*.scss                    generated partials
//! <styles_root>/<scale>/demo.html                  optional user demo template
//! <css_root>/<scale>.css                           compiled stylesheet
//! <demos_root>/typography-<scale>.html             generated demo page
//! <plugin_host>                                    plugin UI script (spliced)
//! ```

use std::path::{Path, PathBuf};

use crate::generate::{demo, overrides, settings, styles};

/// Token-source file name prefix; the scale name is the part after it.
pub const TOKEN_SOURCE_PREFIX: &str = "typography-config-";

/// A discovered token-source file and the scale name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSource {
    pub name: String,
    pub path: PathBuf,
}

/// All directory roots the pipeline reads from and writes to.
#[derive(Debug, Clone)]
pub struct PathLayout {
    pub config_dir: PathBuf,
    pub styles_root: PathBuf,
    pub css_root: PathBuf,
    pub demos_root: PathBuf,
    pub plugin_host: PathBuf,
}

impl PathLayout {
    /// Token-source path for a scale name.
    pub fn token_source(&self, scale: &str) -> PathBuf {
        self.config_dir
            .join(format!("{TOKEN_SOURCE_PREFIX}{scale}.json"))
    }

    /// The scale's style directory, holding `main.scss` and the generated
    /// partials.
    pub fn style_dir(&self, scale: &str) -> PathBuf {
        self.styles_root.join(scale)
    }

    /// User-authored SCSS entry point compiled into the final CSS.
    pub fn main_scss(&self, scale: &str) -> PathBuf {
        self.style_dir(scale).join("main.scss")
    }

    pub fn settings_partial(&self, scale: &str) -> PathBuf {
        self.style_dir(scale).join(settings::SETTINGS_FILE)
    }

    pub fn overrides_partial(&self, scale: &str) -> PathBuf {
        self.style_dir(scale).join(overrides::OVERRIDES_FILE)
    }

    pub fn styles_partial(&self, scale: &str) -> PathBuf {
        self.style_dir(scale).join(styles::STYLES_FILE)
    }

    /// Compiled stylesheet destination.
    pub fn css_file(&self, scale: &str) -> PathBuf {
        self.css_root.join(format!("{scale}.css"))
    }

    /// Relative href from the demos directory to a scale's stylesheet.
    pub fn css_href(&self, scale: &str) -> String {
        format!("../css/{scale}.css")
    }

    /// Optional user-authored demo template (used verbatim when present).
    pub fn demo_template(&self, scale: &str) -> PathBuf {
        self.style_dir(scale).join("demo.html")
    }

    /// Generated demo page destination.
    pub fn demo_file(&self, scale: &str) -> PathBuf {
        self.demos_root.join(demo::demo_file_name(scale))
    }

    /// Extract the scale name if `path` is a token-source file.
    pub fn scale_name_of(&self, path: &Path) -> Option<String> {
        let file = path.file_name()?.to_str()?;
        let stem = file.strip_prefix(TOKEN_SOURCE_PREFIX)?;
        let name = stem.strip_suffix(".json")?;
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Whether `path` is one of the pipeline's own outputs.  Watch events
    /// for these must be ignored or the pipeline would retrigger itself.
    pub fn is_generated_output(&self, path: &Path) -> bool {
        match path.file_name().and_then(|f| f.to_str()) {
            Some(file) => {
                file == settings::SETTINGS_FILE
                    || file == overrides::OVERRIDES_FILE
                    || file == styles::STYLES_FILE
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PathLayout {
        PathLayout {
            config_dir: "config".into(),
            styles_root: "src".into(),
            css_root: "dist/css".into(),
            demos_root: "dist/demos".into(),
            plugin_host: "figma-plugin/ui.html".into(),
        }
    }

    #[test]
    fn paths_follow_the_convention() {
        let l = layout();
        assert_eq!(
            l.token_source("docs"),
            PathBuf::from("config/typography-config-docs.json")
        );
        assert_eq!(l.main_scss("docs"), PathBuf::from("src/docs/main.scss"));
        assert_eq!(l.css_file("docs"), PathBuf::from("dist/css/docs.css"));
        assert_eq!(
            l.demo_file("docs"),
            PathBuf::from("dist/demos/typography-docs.html")
        );
        assert_eq!(l.css_href("docs"), "../css/docs.css");
    }

    #[test]
    fn scale_name_extraction() {
        let l = layout();
        assert_eq!(
            l.scale_name_of(Path::new("config/typography-config-docs.json")),
            Some("docs".into())
        );
        assert_eq!(l.scale_name_of(Path::new("config/other.json")), None);
        assert_eq!(
            l.scale_name_of(Path::new("config/typography-config-.json")),
            None
        );
    }

    #[test]
    fn generated_outputs_are_recognized() {
        let l = layout();
        assert!(l.is_generated_output(Path::new("src/docs/_generated-styles.scss")));
        assert!(l.is_generated_output(Path::new(
            "src/docs/_vanilla-text-settings.generated.scss"
        )));
        assert!(!l.is_generated_output(Path::new("src/docs/main.scss")));
    }
}
