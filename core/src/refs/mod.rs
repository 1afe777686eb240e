#![deny(missing_docs)]

//! # Reference Handling
//!
//! - **path**: POSIX-style path normalization and same-directory resolution.
//! - **validate**: absolute URL recognition.
//! - **pointer**: JSON Pointer encoding and decoding.
//! - **reference**: JSON Reference parsing and canonicalization.

pub mod path;
pub mod pointer;
pub mod reference;
pub mod validate;

pub use path::{normalize, relative_path};
pub use pointer::{
    build_pointer, build_ref, decode_pointer_segment, encode_pointer_segment, parse_pointer,
};
pub use reference::{create_ref, is_local_ref, parse_ref, ParsedRef};
pub use validate::is_valid_url;
