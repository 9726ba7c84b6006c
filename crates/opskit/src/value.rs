//! Shape helpers for `serde_json::Value` trees.

use serde_json::{Map, Value};

/// Descend through nested objects without intermediate null checks.
///
/// Returns `None` as soon as any path segment is missing or the current
/// node is not an object. An empty path returns the value itself.
pub fn dig<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// Build a new object containing only the named keys.
///
/// Keys that are missing or null in the source are skipped. A non-object
/// source yields an empty object.
pub fn pick(value: &Value, keys: &[&str]) -> Value {
    let mut picked = Map::new();
    if let Value::Object(map) = value {
        for key in keys {
            match map.get(*key) {
                Some(Value::Null) | None => {}
                Some(inner) => {
                    picked.insert((*key).to_string(), inner.clone());
                }
            }
        }
    }
    Value::Object(picked)
}

/// Recursively merge `src` into `dest`.
///
/// Objects merge key-by-key; arrays and scalars replace wholesale. When
/// either side is not an object, `dest` becomes a copy of `src`.
pub fn merge(dest: &mut Value, src: &Value) {
    match (dest, src) {
        (Value::Object(dest_map), Value::Object(src_map)) => {
            for (key, src_value) in src_map {
                match dest_map.get_mut(key) {
                    Some(dest_value) if dest_value.is_object() && src_value.is_object() => {
                        merge(dest_value, src_value);
                    }
                    _ => {
                        dest_map.insert(key.clone(), src_value.clone());
                    }
                }
            }
        }
        (dest, src) => *dest = src.clone(),
    }
}

/// Whether an object value carries the given key.
pub fn has_key(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dig_nested() {
        let value = json!({"a": {"b": {"c": 42}}});
        assert_eq!(dig(&value, &["a", "b", "c"]), Some(&json!(42)));
        assert_eq!(dig(&value, &["a", "b"]), Some(&json!({"c": 42})));
    }

    #[test]
    fn test_dig_missing_path() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(dig(&value, &["a", "x"]), None);
        assert_eq!(dig(&value, &["a", "b", "c"]), None);
    }

    #[test]
    fn test_dig_empty_path_is_identity() {
        let value = json!({"a": 1});
        assert_eq!(dig(&value, &[]), Some(&value));
    }

    #[test]
    fn test_pick_selects_and_skips_nulls() {
        let value = json!({"a": 1, "b": null, "c": "keep", "d": 4});
        assert_eq!(pick(&value, &["a", "b", "c", "missing"]), json!({"a": 1, "c": "keep"}));
    }

    #[test]
    fn test_pick_non_object() {
        assert_eq!(pick(&json!([1, 2]), &["a"]), json!({}));
        assert_eq!(pick(&json!(null), &["a"]), json!({}));
    }

    #[test]
    fn test_merge_objects_recursively() {
        let mut dest = json!({"a": 1, "nested": {"x": 1, "y": 2}});
        merge(&mut dest, &json!({"b": 2, "nested": {"y": 20, "z": 30}}));
        assert_eq!(
            dest,
            json!({"a": 1, "b": 2, "nested": {"x": 1, "y": 20, "z": 30}})
        );
    }

    #[test]
    fn test_merge_replaces_arrays_wholesale() {
        let mut dest = json!({"items": [1, 2, 3]});
        merge(&mut dest, &json!({"items": [9]}));
        assert_eq!(dest, json!({"items": [9]}));
    }

    #[test]
    fn test_merge_non_object_replaces() {
        let mut dest = json!({"a": 1});
        merge(&mut dest, &json!("scalar"));
        assert_eq!(dest, json!("scalar"));
    }

    #[test]
    fn test_has_key() {
        let value = json!({"present": null});
        assert!(has_key(&value, "present"));
        assert!(!has_key(&value, "absent"));
        assert!(!has_key(&json!(1), "anything"));
    }
}
