#![deny(missing_docs)]

//! # Path-Addressed Tree Access
//!
//! Reads and writes inside `serde_json::Value` trees addressed by an [`ObjPath`].
//!
//! Reads never fail: a miss anywhere along the path is `None`. Writes always succeed: any
//! scalar blocking the path is replaced by an empty mapping (see [`force_container_at`]).
//! Writes mutate the tree in place.

pub mod merge;

pub use merge::{merge_values, merge_values_ref};

use crate::refs::pointer::{build_pointer, parse_pointer};
use serde_json::{Map, Value};
use std::fmt::{self, Display};
use std::ops::Deref;

/// One step of an [`ObjPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    /// A sequence index.
    Index(usize),
    /// A mapping key.
    Key(String),
}

impl PathKey {
    /// Shorthand for `PathKey::Key`.
    pub fn key(key: impl Into<String>) -> Self {
        PathKey::Key(key.into())
    }

    /// The numeric view of this key, if it has one.
    ///
    /// `Key("3")` is `Some(3)`, mirroring how sequences are indexed with string keys.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathKey::Index(index) => Some(*index),
            PathKey::Key(key) => parse_index(key),
        }
    }

    /// Canonical decimal tokens (`0`, `12`, not `012`) become indices.
    fn from_token(token: String) -> Self {
        match parse_index(&token) {
            Some(index) if index.to_string() == token => PathKey::Index(index),
            _ => PathKey::Key(token),
        }
    }
}

impl Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Index(index) => write!(f, "{}", index),
            PathKey::Key(key) => f.write_str(key),
        }
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        PathKey::Key(key)
    }
}

/// An ordered sequence of keys addressing a location inside a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjPath(Vec<PathKey>);

impl ObjPath {
    /// Creates an empty path (the root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON Pointer. Canonical integer tokens become [`PathKey::Index`].
    pub fn from_pointer(pointer: &str) -> Self {
        ObjPath(
            parse_pointer(pointer)
                .into_iter()
                .map(PathKey::from_token)
                .collect(),
        )
    }

    /// Encodes this path as a JSON Pointer.
    pub fn to_pointer(&self) -> String {
        let tokens: Vec<String> = self.0.iter().map(PathKey::to_string).collect();
        build_pointer(&tokens)
    }

    /// Appends a key.
    pub fn push(&mut self, key: impl Into<PathKey>) {
        self.0.push(key.into());
    }

    /// Consumes the path, returning its keys.
    pub fn into_inner(self) -> Vec<PathKey> {
        self.0
    }
}

impl Deref for ObjPath {
    type Target = [PathKey];

    fn deref(&self) -> &[PathKey] {
        &self.0
    }
}

impl From<Vec<PathKey>> for ObjPath {
    fn from(keys: Vec<PathKey>) -> Self {
        ObjPath(keys)
    }
}

impl FromIterator<PathKey> for ObjPath {
    fn from_iter<I: IntoIterator<Item = PathKey>>(iter: I) -> Self {
        ObjPath(iter.into_iter().collect())
    }
}

impl Display for ObjPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pointer())
    }
}

/// Walks `path` from `root`, returning `None` at the first miss.
///
/// Sequences are indexed numerically (a non-numeric key misses), mappings by key (an
/// [`PathKey::Index`] looks up its decimal string). Scalars miss on any key.
///
/// # Examples
///
/// ```
/// use refpath_core::tree::{get_value_by_path, PathKey};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2, 3]});
/// let path = [PathKey::key("a"), PathKey::Index(1)];
/// assert_eq!(get_value_by_path(&doc, &path), Some(&json!(2)));
/// ```
pub fn get_value_by_path<'a>(root: &'a Value, path: &[PathKey]) -> Option<&'a Value> {
    path.iter().try_fold(root, |current, key| match current {
        Value::Array(items) => key.as_index().and_then(|index| items.get(index)),
        Value::Object(map) => map.get(&key.to_string()),
        _ => None,
    })
}

/// Mutable counterpart of [`get_value_by_path`]. Never creates anything.
pub fn get_value_by_path_mut<'a>(root: &'a mut Value, path: &[PathKey]) -> Option<&'a mut Value> {
    path.iter().try_fold(root, |current, key| match current {
        Value::Array(items) => key.as_index().and_then(move |index| items.get_mut(index)),
        Value::Object(map) => map.get_mut(&key.to_string()),
        _ => None,
    })
}

/// Writes `value` at `path`, creating or overwriting whatever is in the way.
///
/// An empty path writes nothing. Every intermediate slot that is not a mapping or sequence
/// is replaced with an empty mapping before descending; the final slot is overwritten.
pub fn set_value_by_path(root: &mut Value, path: &[PathKey], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for key in parents {
        current = force_container_at(current, key);
    }
    *slot_at(current, last) = value;
}

/// Returns the slot under `key` in `container`, guaranteeing it holds a mapping or sequence.
///
/// This is the destructive step of [`set_value_by_path`]:
/// - a `container` that cannot hold `key` is coerced first (scalars become an empty mapping,
///   a sequence addressed by a non-numeric key, or by an index far past its end, becomes a
///   mapping keyed by its indices);
/// - a missing slot, or one holding a scalar, is set to an empty mapping.
///
/// Existing mappings and sequences are returned untouched.
pub fn force_container_at<'a>(container: &'a mut Value, key: &PathKey) -> &'a mut Value {
    let slot = slot_at(container, key);
    if !(slot.is_object() || slot.is_array()) {
        if !slot.is_null() {
            tracing::trace!(key = %key, "replacing scalar with an empty mapping");
        }
        *slot = Value::Object(Map::new());
    }
    slot
}

/// Reads the value addressed by a JSON Pointer.
pub fn get_value_by_pointer<'a>(root: &'a Value, pointer: &str) -> Option<&'a Value> {
    get_value_by_path(root, &ObjPath::from_pointer(pointer))
}

/// Writes `value` at the location addressed by a JSON Pointer.
pub fn set_value_by_pointer(root: &mut Value, pointer: &str, value: Value) {
    set_value_by_path(root, &ObjPath::from_pointer(pointer), value);
}

/// Most `null` slots a write may append to a sequence before it is re-keyed as a mapping.
const MAX_SEQUENCE_PADDING: usize = 4096;

/// The slot for `key`, inserting `null` (and padding sequences) when absent.
///
/// An index further than [`MAX_SEQUENCE_PADDING`] past the end of a sequence re-keys the
/// sequence as a mapping and writes under the decimal key instead.
fn slot_at<'a>(container: &'a mut Value, key: &PathKey) -> &'a mut Value {
    let pads_in_place = match (&*container, key.as_index()) {
        (Value::Array(items), Some(index)) => {
            index.saturating_sub(items.len()) <= MAX_SEQUENCE_PADDING
        }
        _ => false,
    };
    if !pads_in_place && !container.is_object() {
        *container = Value::Object(into_mapping(container.take()));
    }
    match (container, key.as_index()) {
        (Value::Array(items), Some(index)) => {
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        }
        (Value::Object(map), _) => map.entry(key.to_string()).or_insert(Value::Null),
        // Anything that is neither a paddable sequence nor a mapping was re-keyed above.
        _ => unreachable!("slot container was re-keyed as a mapping"),
    }
}

fn into_mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Array(items) => {
            tracing::trace!(len = items.len(), "re-keying sequence as a mapping");
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect()
        }
        Value::Object(map) => map,
        other => {
            if !other.is_null() {
                tracing::trace!("replacing scalar root with an empty mapping");
            }
            Map::new()
        }
    }
}

fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}
