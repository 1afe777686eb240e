#![deny(missing_docs)]

//! # JSON Reference Resolution
//!
//! Splits `$ref` strings into a document location and an in-document pointer, resolves the
//! location against the referring document and produces a canonical reference string.
//!
//! Nothing is fetched here; the result only identifies the target.

use crate::refs::path::relative_path;
use crate::refs::validate::is_valid_url;
use serde::Serialize;
use url::Url;

/// A `$ref` split and resolved against its base location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRef {
    /// Resolved document location; empty when neither the reference nor the base has one.
    pub file_path: String,
    /// Raw pointer fragment, empty when the reference targets the whole document.
    pub pointer: String,
    /// Canonical reference string, see [`create_ref`].
    pub normalized: String,
}

/// Parses `reference` and resolves its document part against `base_path`.
///
/// - A reference without a document part (`#/a`) targets `base_path` itself.
/// - Absolute `http(s)` URLs are taken as-is, in their canonical serialization.
/// - Anything else replaces the file name of `base_path` and is normalized.
/// - A missing, empty or lone `/` fragment all mean "no pointer".
///
/// # Examples
///
/// ```
/// use refpath_core::refs::parse_ref;
///
/// let parsed = parse_ref("foo.yaml#/a/b", Some("dir/base.yaml"));
/// assert_eq!(parsed.file_path, "dir/foo.yaml");
/// assert_eq!(parsed.pointer, "/a/b");
/// assert_eq!(parsed.normalized, "dir/foo.yaml#/a/b");
/// ```
pub fn parse_ref(reference: &str, base_path: Option<&str>) -> ParsedRef {
    let (source_path, fragment) = match reference.split_once('#') {
        Some((source, fragment)) => (source, Some(fragment)),
        None => (reference, None),
    };

    let file_path = resolve_file_path(source_path, base_path);
    let pointer = match fragment {
        Some(fragment) if !fragment.is_empty() && fragment != "/" => fragment.to_string(),
        _ => String::new(),
    };
    let normalized = create_ref(Some(&file_path), Some(&pointer));

    ParsedRef {
        file_path,
        pointer,
        normalized,
    }
}

/// Joins a document location and a pointer into a reference string.
///
/// | base  | pointer | result           |
/// |-------|---------|------------------|
/// | none  | none    | `#`              |
/// | none  | `p`     | `#p`             |
/// | `b`   | none    | `b`              |
/// | `b`   | `p`     | `b#p`            |
///
/// Empty strings count as absent.
pub fn create_ref(base_path: Option<&str>, pointer: Option<&str>) -> String {
    let base_path = base_path.filter(|b| !b.is_empty());
    let pointer = pointer.filter(|p| !p.is_empty());

    match (base_path, pointer) {
        (None, None) => "#".to_string(),
        (None, Some(pointer)) => format!("#{}", pointer),
        (Some(base), None) => base.to_string(),
        (Some(base), Some(pointer)) => format!("{}#{}", base, pointer),
    }
}

/// Returns true for references into the current document (`#...`).
pub fn is_local_ref(reference: &str) -> bool {
    reference.starts_with('#')
}

fn resolve_file_path(source_path: &str, base_path: Option<&str>) -> String {
    if source_path.is_empty() {
        return match base_path.filter(|b| !b.is_empty()) {
            Some(base) if is_valid_url(base) => canonical_url(base),
            Some(base) => relative_path(None, Some(base)),
            None => String::new(),
        };
    }

    if is_valid_url(source_path) {
        return canonical_url(source_path);
    }

    if let Some(base) = base_path.filter(|b| is_valid_url(b)) {
        match Url::parse(base).and_then(|base_url| base_url.join(source_path)) {
            Ok(url) => return url.to_string(),
            Err(err) => {
                tracing::debug!(base, source_path, error = %err, "URL join failed, using path rules");
            }
        }
    }

    relative_path(Some(source_path), base_path)
}

fn canonical_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => url.to_string(),
        Err(err) => {
            tracing::debug!(raw, error = %err, "URL-like location did not parse");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ref_relative_file() {
        let parsed = parse_ref("foo.yaml#/a/b", Some("dir/base.yaml"));
        assert_eq!(parsed.file_path, "dir/foo.yaml");
        assert_eq!(parsed.pointer, "/a/b");
        assert_eq!(parsed.normalized, "dir/foo.yaml#/a/b");
    }

    #[test]
    fn test_parse_ref_local_pointer_falls_back_to_base() {
        let parsed = parse_ref("#/x", Some("dir/base.yaml"));
        assert_eq!(parsed.file_path, "dir/base.yaml");
        assert_eq!(parsed.pointer, "/x");
        assert_eq!(parsed.normalized, "dir/base.yaml#/x");
    }

    #[test]
    fn test_parse_ref_local_pointer_absolute_base() {
        let parsed = parse_ref("#/components/schemas/Pet", Some("/abs/dir/base.yaml"));
        assert_eq!(parsed.file_path, "/abs/dir/base.yaml");
        assert_eq!(parsed.normalized, "/abs/dir/base.yaml#/components/schemas/Pet");

        let parsed = parse_ref("#", Some("/abs/dir/./base.yaml"));
        assert_eq!(parsed.file_path, "/abs/dir/base.yaml");
        assert_eq!(parsed.normalized, "/abs/dir/base.yaml");
    }

    #[test]
    fn test_parse_ref_local_pointer_url_base() {
        let parsed = parse_ref("#/Pet", Some("https://ex.com/specs/api.yaml"));
        assert_eq!(parsed.file_path, "https://ex.com/specs/api.yaml");
        assert_eq!(parsed.normalized, "https://ex.com/specs/api.yaml#/Pet");
    }

    #[test]
    fn test_parse_ref_local_without_base() {
        let parsed = parse_ref("#/components/schemas/Pet", None);
        assert_eq!(parsed.file_path, "");
        assert_eq!(parsed.normalized, "#/components/schemas/Pet");

        let parsed = parse_ref("#", None);
        assert_eq!(parsed.file_path, "");
        assert_eq!(parsed.pointer, "");
        assert_eq!(parsed.normalized, "#");
    }

    #[test]
    fn test_parse_ref_url_bypasses_base() {
        let parsed = parse_ref("https://ex.com/s.yaml#/a", Some("dir/base.yaml"));
        assert_eq!(parsed.file_path, "https://ex.com/s.yaml");
        assert_eq!(parsed.normalized, "https://ex.com/s.yaml#/a");
    }

    #[test]
    fn test_parse_ref_url_canonical_form() {
        let parsed = parse_ref("HTTPS://Ex.com/a/../s.yaml", None);
        assert_eq!(parsed.file_path, "https://ex.com/s.yaml");
    }

    #[test]
    fn test_parse_ref_relative_to_url_base() {
        let parsed = parse_ref("pet.yaml#/Pet", Some("https://ex.com/specs/api.yaml"));
        assert_eq!(parsed.file_path, "https://ex.com/specs/pet.yaml");
        assert_eq!(parsed.normalized, "https://ex.com/specs/pet.yaml#/Pet");
    }

    #[test]
    fn test_parse_ref_empty_fragments_mean_no_pointer() {
        for reference in ["foo.yaml", "foo.yaml#", "foo.yaml#/"] {
            let parsed = parse_ref(reference, Some("dir/base.yaml"));
            assert_eq!(parsed.pointer, "", "{}", reference);
            assert_eq!(parsed.normalized, "dir/foo.yaml", "{}", reference);
        }
    }

    #[test]
    fn test_parse_ref_splits_on_first_hash() {
        let parsed = parse_ref("a.yaml#/x#y", None);
        assert_eq!(parsed.file_path, "a.yaml");
        assert_eq!(parsed.pointer, "/x#y");
    }

    #[test]
    fn test_parse_ref_collapses_parent_dirs() {
        let parsed = parse_ref("../common/types.yaml#/Id", Some("api/v1/root.yaml"));
        assert_eq!(parsed.file_path, "api/common/types.yaml");
    }

    #[test]
    fn test_create_ref_table() {
        assert_eq!(create_ref(None, None), "#");
        assert_eq!(create_ref(None, Some("/a")), "#/a");
        assert_eq!(create_ref(Some("b.yaml"), None), "b.yaml");
        assert_eq!(create_ref(Some("b.yaml"), Some("/a")), "b.yaml#/a");
        assert_eq!(create_ref(Some(""), Some("")), "#");
    }

    #[test]
    fn test_is_local_ref() {
        assert!(is_local_ref("#/definitions/Pet"));
        assert!(is_local_ref("#"));
        assert!(!is_local_ref("pet.yaml#/Pet"));
    }
}
