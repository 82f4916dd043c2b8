//! Dot-path addressing over the JSON image of the state.
//!
//! A path is a non-empty, `.`-separated list of non-empty segments. Segments
//! address object keys; on arrays a segment must be a decimal index.

use serde_json::{Map, Value};

/// Split a dot-path into segments, or `None` if the path is malformed.
pub fn parse_path(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(segments)
}

pub fn resolve<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    segments.iter().try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Write `value` at `segments`, creating intermediate objects where the
/// path is absent or null. Returns `false` when an intermediate node is a
/// scalar or an array index is out of range.
pub fn assign(root: &mut Value, segments: &[&str], value: Value) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut node = root;
    for segment in parents {
        if node.is_null() {
            *node = Value::Object(Map::new());
        }
        node = match node {
            Value::Object(map) => map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(items) => match segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                Some(item) => item,
                None => return false,
            },
            _ => return false,
        };
    }

    if node.is_null() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            true
        }
        Value::Array(items) => match last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// Recursive deep merge of `source` into `target`.
///
/// Plain objects merge key by key; arrays, scalars and null replace the
/// target value wholesale.
pub fn merge_state(target: &mut Value, source: Value) {
    match source {
        Value::Object(source_map) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(target_map) = target {
                for (key, value) in source_map {
                    match target_map.get_mut(&key) {
                        Some(existing) if value.is_object() => merge_state(existing, value),
                        _ => {
                            target_map.insert(key, value);
                        }
                    }
                }
            }
        }
        other => *target = other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path_rejects_malformed() {
        assert_eq!(parse_path("a.b"), Some(vec!["a", "b"]));
        assert!(parse_path("").is_none());
        assert!(parse_path("a..b").is_none());
        assert!(parse_path(".a").is_none());
        assert!(parse_path("a.").is_none());
    }

    #[test]
    fn test_resolve_objects_and_array_indices() {
        let root = json!({"a": {"list": [10, 20]}});
        assert_eq!(resolve(&root, &["a", "list", "1"]), Some(&json!(20)));
        assert_eq!(resolve(&root, &["a", "list", "2"]), None);
        assert_eq!(resolve(&root, &["a", "missing"]), None);
        assert_eq!(resolve(&root, &["a", "list", "x"]), None);
    }

    #[test]
    fn test_assign_creates_intermediate_objects() {
        let mut root = json!({"a": null});
        assert!(assign(&mut root, &["a", "b", "c"], json!(1)));
        assert!(assign(&mut root, &["x", "y"], json!("z")));
        assert_eq!(root, json!({"a": {"b": {"c": 1}}, "x": {"y": "z"}}));
    }

    #[test]
    fn test_assign_refuses_to_descend_into_scalars() {
        let mut root = json!({"a": 5, "list": [1]});
        assert!(!assign(&mut root, &["a", "b"], json!(1)));
        assert!(!assign(&mut root, &["list", "3"], json!(1)));
        assert!(assign(&mut root, &["list", "0"], json!(9)));
        assert_eq!(root, json!({"a": 5, "list": [9]}));
    }

    #[test]
    fn test_merge_replaces_arrays_and_merges_objects() {
        let mut target = json!({
            "prefs": {"theme": "light", "currency": "USD"},
            "wishlist": [1, 2, 3],
            "name": "default"
        });
        merge_state(
            &mut target,
            json!({"prefs": {"theme": "dark"}, "wishlist": [7], "extra": {"k": 1}}),
        );
        assert_eq!(
            target,
            json!({
                "prefs": {"theme": "dark", "currency": "USD"},
                "wishlist": [7],
                "name": "default",
                "extra": {"k": 1}
            })
        );
    }

    #[test]
    fn test_merge_over_scalar_target_creates_object() {
        let mut target = json!({"draft": null});
        merge_state(&mut target, json!({"draft": {"brands": ["COS"]}}));
        assert_eq!(target, json!({"draft": {"brands": ["COS"]}}));
    }
}
