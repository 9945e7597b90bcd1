//! Field accessors for decoded JSON objects.
//!
//! The response mappers use these to apply one explicit default policy per
//! field:
//! - `*_or` accessors return the given default when the key is missing or has
//!   the wrong type
//! - `opt_*` accessors return `None` in the same situations
//! - `required_*` accessors fail with [`Error::invalid_response`]
//!
//! A JSON `null` is treated exactly like a missing key.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{Error, JsonObject, Result};

pub fn opt_string(obj: &JsonObject, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn string_or(obj: &JsonObject, key: &str, default: &str) -> String {
    opt_string(obj, key).unwrap_or_else(|| default.to_string())
}

pub fn opt_f64(obj: &JsonObject, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

pub fn f64_or(obj: &JsonObject, key: &str, default: f64) -> f64 {
    opt_f64(obj, key).unwrap_or(default)
}

/// Non-negative integer; integral floats such as `5.0` are accepted.
pub fn opt_u64(obj: &JsonObject, key: &str) -> Option<u64> {
    obj.get(key).and_then(as_count)
}

pub fn u64_or(obj: &JsonObject, key: &str, default: u64) -> u64 {
    opt_u64(obj, key).unwrap_or(default)
}

pub fn bool_or(obj: &JsonObject, key: &str, default: bool) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub fn object<'a>(obj: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    obj.get(key).and_then(Value::as_object)
}

/// String elements of an array; non-string elements are skipped.
pub fn opt_string_list(obj: &JsonObject, key: &str) -> Option<Vec<String>> {
    obj.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

pub fn string_list(obj: &JsonObject, key: &str) -> Vec<String> {
    opt_string_list(obj, key).unwrap_or_default()
}

/// Object elements of an array, cloned; non-object elements are skipped.
pub fn opt_object_list(obj: &JsonObject, key: &str) -> Option<Vec<JsonObject>> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).cloned().collect())
}

/// Borrowed object elements of an array; missing key yields nothing.
pub fn object_list<'a>(obj: &'a JsonObject, key: &str) -> Vec<&'a JsonObject> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

/// String-valued entries of an object; other entries are skipped.
pub fn opt_string_map(obj: &JsonObject, key: &str) -> Option<BTreeMap<String, String>> {
    object(obj, key).map(|map| {
        map.iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect()
    })
}

/// Count-valued entries of an object; other entries are skipped.
pub fn opt_count_map(obj: &JsonObject, key: &str) -> Option<BTreeMap<String, u64>> {
    object(obj, key).map(|map| {
        map.iter()
            .filter_map(|(k, v)| as_count(v).map(|n| (k.clone(), n)))
            .collect()
    })
}

pub fn required_str(obj: &JsonObject, key: &str, entity: &str) -> Result<String> {
    opt_string(obj, key).ok_or_else(|| missing(entity, key))
}

pub fn required_f64(obj: &JsonObject, key: &str, entity: &str) -> Result<f64> {
    opt_f64(obj, key).ok_or_else(|| missing(entity, key))
}

pub fn required_u64(obj: &JsonObject, key: &str, entity: &str) -> Result<u64> {
    opt_u64(obj, key).ok_or_else(|| missing(entity, key))
}

fn missing(entity: &str, key: &str) -> Error {
    Error::invalid_response(format!(
        "Invalid {} in response: missing or invalid field `{}`",
        entity, key
    ))
}

fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> JsonObject {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn defaults_apply_to_missing_null_and_mistyped() {
        let o = obj(json!({"a": null, "b": "text", "c": 3}));
        assert_eq!(f64_or(&o, "a", 0.0), 0.0);
        assert_eq!(f64_or(&o, "b", 1.5), 1.5);
        assert_eq!(f64_or(&o, "c", 0.0), 3.0);
        assert_eq!(string_or(&o, "c", ""), "");
        assert_eq!(string_or(&o, "missing", "dflt"), "dflt");
        assert!(bool_or(&o, "missing", true));
    }

    #[test]
    fn counts_accept_integral_floats() {
        let o = obj(json!({"a": 5.0, "b": 2.5, "c": -1}));
        assert_eq!(opt_u64(&o, "a"), Some(5));
        assert_eq!(opt_u64(&o, "b"), None);
        assert_eq!(opt_u64(&o, "c"), None);
    }

    #[test]
    fn lists_skip_foreign_elements() {
        let o = obj(json!({"t": ["a", 1, "b"], "r": [{"x": 1}, 2]}));
        assert_eq!(opt_string_list(&o, "t"), Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(opt_object_list(&o, "r").map(|r| r.len()), Some(1));
        assert!(object_list(&o, "missing").is_empty());
    }

    #[test]
    fn required_fields_report_the_key() {
        let o = obj(json!({"id": 7}));
        let err = required_str(&o, "id", "resource").unwrap_err();
        assert!(err.message().contains("`id`"));
        assert_eq!(err.code(), Some(crate::error::INVALID_RESPONSE_CODE));
    }
}
