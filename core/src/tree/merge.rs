#![deny(missing_docs)]

//! # Deep Merge
//!
//! Folds a patch tree into a base tree, as used when composing `allOf` members.

use serde_json::Value;

/// Merges `patch` into `value`. The patch wins every conflict.
///
/// - two sequences concatenate, `value` elements first;
/// - two mappings merge key by key, recursing on keys present in both;
/// - any other pairing yields `patch` unchanged.
///
/// Both inputs are consumed, so the result never aliases a caller's tree.
///
/// # Examples
///
/// ```
/// use refpath_core::tree::merge_values;
/// use serde_json::json;
///
/// let merged = merge_values(json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4}));
/// assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
/// ```
pub fn merge_values(value: Value, patch: Value) -> Value {
    match (value, patch) {
        (Value::Array(mut items), Value::Array(extra)) => {
            items.extend(extra);
            Value::Array(items)
        }
        (Value::Object(mut map), Value::Object(patch)) => {
            for (key, patch_value) in patch {
                let merged = match map.get_mut(&key) {
                    Some(existing) => merge_values(existing.take(), patch_value),
                    None => patch_value,
                };
                map.insert(key, merged);
            }
            Value::Object(map)
        }
        (_, patch) => patch,
    }
}

/// Borrowing variant of [`merge_values`]; clones both sides first.
pub fn merge_values_ref(value: &Value, patch: &Value) -> Value {
    merge_values(value.clone(), patch.clone())
}
