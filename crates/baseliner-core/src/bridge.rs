//! Plugin bridge: in-place splice of the data blob into the host script.
//!
//! The host file (the plugin's UI HTML) carries exactly one
//! `const TOKENS_DATA = { … };` statement.  [`splice`] replaces that
//! statement and nothing else — every other byte of the host stays
//! untouched.  A host file without the marker was hand-edited
//! incompatibly; that is a hard error, never a silent append.

use crate::application::ApplicationError;
use crate::generate::plugin::BLOB_MARKER;

const STATEMENT_END: &str = "};";

/// Replace the marker-delimited blob statement in `host` with `blob`.
///
/// `blob` must itself be a complete statement (as produced by
/// [`crate::generate::plugin::emit_blob`]).  Fails with
/// [`ApplicationError::MarkerNotFound`] when the host carries no marker,
/// leaving the caller's file untouched.
pub fn splice(host: &str, blob: &str) -> Result<String, ApplicationError> {
    let start = host.find(BLOB_MARKER).ok_or(ApplicationError::MarkerNotFound)?;
    let end_rel = host[start..]
        .find(STATEMENT_END)
        .ok_or(ApplicationError::MarkerNotFound)?;
    let end = start + end_rel + STATEMENT_END.len();

    let mut out = String::with_capacity(host.len() - (end - start) + blob.len());
    out.push_str(&host[..start]);
    out.push_str(blob);
    out.push_str(&host[end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "<html>\n<script>\nconst TOKENS_DATA = {\n  \"old\": true\n};\nrender(TOKENS_DATA);\n</script>\n</html>\n";

    #[test]
    fn replaces_only_the_marked_statement() {
        let out = splice(HOST, "const TOKENS_DATA = {\n  \"new\": 1\n};").unwrap();
        assert!(out.contains("\"new\": 1"));
        assert!(!out.contains("\"old\""));
        // everything around the statement is byte-identical
        assert!(out.starts_with("<html>\n<script>\n"));
        assert!(out.ends_with("\nrender(TOKENS_DATA);\n</script>\n</html>\n"));
    }

    #[test]
    fn splice_is_idempotent() {
        let blob = "const TOKENS_DATA = {\n  \"a\": 2\n};";
        let once = splice(HOST, blob).unwrap();
        let twice = splice(&once, blob).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_marker_is_an_error() {
        let err = splice("<html>no data here</html>", "const TOKENS_DATA = {};").unwrap_err();
        assert!(matches!(err, ApplicationError::MarkerNotFound));
    }

    #[test]
    fn unterminated_statement_is_an_error() {
        let err = splice("const TOKENS_DATA = { broken", "const TOKENS_DATA = {};").unwrap_err();
        assert!(matches!(err, ApplicationError::MarkerNotFound));
    }
}
