#![deny(missing_docs)]

//! # JSON Pointer Codec
//!
//! Converts between pointer strings (`/a~1b/c~0d`) and their decoded token lists.
//!
//! Tokens are escaped (`~` → `~0`, `/` → `~1`) and then percent-encoded with the
//! `encodeURIComponent` character set, so pointers built here are safe to embed in a URI
//! fragment. Decoding undoes both steps in mirror order.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`.
const TOKEN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decodes a single pointer token (handles `~1`, `~0` and percent-escapes).
pub fn decode_pointer_segment(segment: &str) -> String {
    let unescaped = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&unescaped)
        .decode_utf8_lossy()
        .into_owned()
}

/// Encodes a single pointer token. Inverse of [`decode_pointer_segment`].
pub fn encode_pointer_segment(token: &str) -> String {
    let escaped = token.replace('~', "~0").replace('/', "~1");
    utf8_percent_encode(&escaped, TOKEN_ENCODE_SET).to_string()
}

/// Splits a pointer into its decoded tokens.
///
/// Everything before the first `/` is discarded, so `"/a/b"` and `"#/a/b"` both yield
/// `["a", "b"]`. The empty pointer yields no tokens.
///
/// # Examples
///
/// ```
/// use refpath_core::refs::parse_pointer;
///
/// assert_eq!(parse_pointer("/a~1b/c~0d"), vec!["a/b", "c~d"]);
/// assert!(parse_pointer("").is_empty());
/// ```
pub fn parse_pointer(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(decode_pointer_segment)
        .collect()
}

/// Joins tokens into a pointer string. No tokens yields the empty string.
///
/// # Examples
///
/// ```
/// use refpath_core::refs::build_pointer;
///
/// assert_eq!(build_pointer(&["a/b", "c~d"]), "/a~1b/c~0d");
/// assert_eq!(build_pointer::<&str>(&[]), "");
/// ```
pub fn build_pointer<T: AsRef<str>>(tokens: &[T]) -> String {
    let mut pointer = String::new();
    for token in tokens {
        pointer.push('/');
        pointer.push_str(&encode_pointer_segment(token.as_ref()));
    }
    pointer
}

/// Builds a reference string from a file name and a token path.
///
/// An empty path yields the file name alone, or `"#"` when there is no file name.
pub fn build_ref<T: AsRef<str>>(path: &[T], file_name: Option<&str>) -> String {
    let file_name = file_name.unwrap_or_default();
    if path.is_empty() {
        return if file_name.is_empty() {
            "#".to_string()
        } else {
            file_name.to_string()
        };
    }
    format!("{}#{}", file_name, build_pointer(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pointer_unescapes() {
        assert_eq!(parse_pointer("/a~1b/c~0d"), vec!["a/b", "c~d"]);
        assert_eq!(parse_pointer("/paths/~1pets~1{id}"), vec!["paths", "/pets/{id}"]);
    }

    #[test]
    fn test_parse_pointer_unescape_order() {
        // `~01` is an escaped `~` followed by `1`, never a slash
        assert_eq!(parse_pointer("/~01"), vec!["~1"]);
    }

    #[test]
    fn test_parse_pointer_percent_decodes() {
        assert_eq!(parse_pointer("/User%20Profile~1details"), vec!["User Profile/details"]);
    }

    #[test]
    fn test_parse_pointer_edges() {
        assert!(parse_pointer("").is_empty());
        assert_eq!(parse_pointer("/"), vec![""]);
        assert_eq!(parse_pointer("//"), vec!["", ""]);
        assert_eq!(parse_pointer("a/b"), vec!["b"]);
    }

    #[test]
    fn test_build_pointer_escapes() {
        assert_eq!(build_pointer(&["a/b", "c~d"]), "/a~1b/c~0d");
        assert_eq!(build_pointer(&["~1"]), "/~01");
        assert_eq!(build_pointer(&["a b", "%"]), "/a%20b/%25");
        assert_eq!(build_pointer(&[""]), "/");
    }

    #[test]
    fn test_build_pointer_round_trip() {
        let tokens = vec!["components", "schemas", "a/b~c", "{id}", "ünï"];
        assert_eq!(parse_pointer(&build_pointer(&tokens)), tokens);
    }

    #[test]
    fn test_build_ref() {
        assert_eq!(build_ref::<&str>(&[], None), "#");
        assert_eq!(build_ref::<&str>(&[], Some("pet.yaml")), "pet.yaml");
        assert_eq!(
            build_ref(&["definitions", "Pet"], Some("pet.yaml")),
            "pet.yaml#/definitions/Pet"
        );
        assert_eq!(build_ref(&["definitions", "Pet"], None), "#/definitions/Pet");
    }
}
