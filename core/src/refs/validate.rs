#![deny(missing_docs)]

//! # URL Recognition
//!
//! A narrow predicate that separates absolute HTTP(S) URLs from filesystem-style paths.
//! It is not an RFC 3986 validator: only `http`/`https`, dotted domain names with an
//! alphabetic TLD, and dotted-quad IPv4 hosts are recognized.

use regex::Regex;
use std::sync::OnceLock;

/// Returns true when `s` is an absolute `http`/`https` URL with a domain or IPv4 host.
///
/// # Examples
///
/// ```
/// use refpath_core::refs::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/schemas/pet.yaml"));
/// assert!(!is_valid_url("schemas/pet.yaml"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let url_re = URL_RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)^https?://",
            r"(([a-z\d]([a-z\d-]*[a-z\d])?\.)+[a-z]{2,}|(\d{1,3}\.){3}\d{1,3})",
            r"(:\d+)?",
            r"(/[-a-z\d%_.~+@!$&'()*,;=:]*)*",
            r"(\?[-a-z\d%_.~+=&;/]*)?",
            r"(#[-a-z\d%_.~/]*)?$",
        ))
        .expect("Invalid regex")
    });
    url_re.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://api.example.co.uk/v1/openapi.yaml"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM/Spec.JSON"));
    }

    #[test]
    fn test_accepts_port_query_fragment() {
        assert!(is_valid_url("https://example.com:8443/s.yaml"));
        assert!(is_valid_url("https://example.com/s.yaml?version=2&raw=1"));
        assert!(is_valid_url("https://example.com/s.yaml#/components/schemas"));
    }

    #[test]
    fn test_accepts_ipv4_host() {
        assert!(is_valid_url("http://127.0.0.1:8080/spec.json"));
    }

    #[test]
    fn test_rejects_paths_and_other_schemes() {
        assert!(!is_valid_url("dir/base.yaml"));
        assert!(!is_valid_url("/abs/base.yaml"));
        assert!(!is_valid_url("file:///tmp/base.yaml"));
        assert!(!is_valid_url("ftp://example.com/base.yaml"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_rejects_hosts_without_tld() {
        assert!(!is_valid_url("http://localhost/spec.json"));
        assert!(!is_valid_url("http://example.c/spec.json"));
        assert!(!is_valid_url("http://[::1]/spec.json"));
    }
}
