#![deny(missing_docs)]

//! # Path Normalization
//!
//! POSIX-style normalization of filesystem and URL-like paths.
//!
//! The algorithm is self-contained and never consults the host platform: `/` is the only
//! separator, `.` segments vanish, `..` pops the previous real segment. A relative path may
//! climb above its starting directory (leading `..` segments survive), an absolute path never
//! climbs above `/`.

use percent_encoding::percent_decode_str;

/// Normalizes a `/`-separated path.
///
/// - An empty input yields `"."`.
/// - Percent-escapes are decoded first; malformed escapes are kept verbatim.
/// - A leading `/` and a trailing `/` are both preserved. Both are read from the raw input
///   before decoding, so an encoded separator never makes a path absolute (`%2Fa` → `a`).
///
/// # Examples
///
/// ```
/// use refpath_core::refs::normalize;
///
/// assert_eq!(normalize("/a/b/../c"), "/a/c");
/// assert_eq!(normalize("../a"), "../a");
/// assert_eq!(normalize("/../a"), "/a");
/// assert_eq!(normalize("a/b/"), "a/b/");
/// ```
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let is_absolute = path.starts_with('/');
    let trailing_separator = path.ends_with('/');

    let decoded = decode_path(path);
    let mut normalized = collapse_segments(&decoded, !is_absolute);

    if normalized.is_empty() && !is_absolute {
        normalized.push('.');
    }
    if !normalized.is_empty() && trailing_separator {
        normalized.push('/');
    }
    if is_absolute {
        normalized.insert(0, '/');
    }
    normalized
}

/// Resolves `path` against the directory that contains `base_path`.
///
/// The last segment of `base_path` is treated as a file name and replaced by `path`, so
/// `relative_path(Some("foo.yaml"), Some("dir/bar.yaml"))` is `"dir/foo.yaml"`. With only one
/// side present the other one is simply normalized. Empty strings count as absent.
pub fn relative_path(path: Option<&str>, base_path: Option<&str>) -> String {
    let path = path.filter(|p| !p.is_empty());
    let base_path = base_path.filter(|b| !b.is_empty());

    match (path, base_path) {
        (Some(path), Some(base)) => {
            let mut segments: Vec<&str> = base.split('/').collect();
            segments.pop();
            segments.push(path);
            normalize(&segments.join("/"))
        }
        (Some(path), None) => normalize(path),
        (None, Some(base)) => normalize(base),
        (None, None) => normalize(""),
    }
}

/// Percent-decodes a path, falling back to the raw text when the bytes are not UTF-8.
fn decode_path(path: &str) -> String {
    if !path.contains('%') {
        return path.to_string();
    }
    match percent_decode_str(path).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            tracing::trace!(path, error = %err, "percent-decoded path is not UTF-8, keeping raw");
            path.to_string()
        }
    }
}

/// Collapses `.`, `..` and empty segments. The result has no leading or trailing `/`.
fn collapse_segments(path: &str, allow_above_root: bool) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|last| *last != "..") {
                    stack.pop();
                } else if allow_above_root {
                    stack.push("..");
                }
            }
            other => stack.push(other),
        }
    }

    stack.join("/")
}
