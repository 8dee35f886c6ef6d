//! Dotted path access into nested JSON objects.
//!
//! `set_path(doc, "device_info.location.lat", v)` produces
//! `{"device_info": {"location": {"lat": v}}}`, creating each level on demand.

use serde_json::{Map, Value};
use thiserror::Error;

/// A strict [`try_set_path`] refused to replace an existing value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot set '{path}': '{at}' already holds a conflicting value")]
pub struct PathConflict {
    /// The path being set.
    pub path: String,
    /// The prefix of `path` holding the conflicting value.
    pub at: String,
}

/// Set `value` at the dotted `path` in `target`.
///
/// Missing intermediate objects are created. An intermediate segment holding
/// a non-object value is overwritten with a fresh object, and the leaf
/// replaces whatever it held before, so setting the same path twice leaves
/// the last value.
pub fn set_path(target: &mut Map<String, Value>, path: &str, value: Value) {
    let (parents, leaf) = split_leaf(path);
    let mut segments = parents.into_iter().flat_map(|p| p.split('.'));
    insert_nested(target, &mut segments, leaf, value);
}

/// Like [`set_path`], but refuse to overwrite a non-object intermediate or to
/// replace an object at the leaf.
///
/// `target` is left untouched when an error is returned. Replacing one
/// scalar leaf with another is permitted.
pub fn try_set_path(
    target: &mut Map<String, Value>,
    path: &str,
    value: Value,
) -> Result<(), PathConflict> {
    let (parents, leaf) = split_leaf(path);

    let mut existing = Some(&*target);
    let mut walked = 0;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        walked += segment.len();
        existing = match existing.and_then(|node| node.get(segment)) {
            None => None,
            Some(Value::Object(child)) => Some(child),
            Some(_) => {
                return Err(PathConflict {
                    path: path.to_string(),
                    at: path[..walked].to_string(),
                });
            }
        };
        // account for the separator
        walked += 1;
    }

    if let Some(Value::Object(_)) = existing.and_then(|node| node.get(leaf)) {
        return Err(PathConflict {
            path: path.to_string(),
            at: path.to_string(),
        });
    }

    set_path(target, path, value);
    Ok(())
}

/// Read the value at the dotted `path`, if every level exists.
pub fn get_path<'a>(target: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let (parents, leaf) = split_leaf(path);

    let mut node = target;
    if let Some(parents) = parents {
        for segment in parents.split('.') {
            node = node.get(segment)?.as_object()?;
        }
    }
    node.get(leaf)
}

/// Every non-object leaf of `target` with its dotted path, depth first in
/// key order.
///
/// Empty objects have no leaves and contribute nothing.
pub fn flatten(target: &Map<String, Value>) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    flatten_into(target, None, &mut out);
    out
}

fn flatten_into<'a>(
    node: &'a Map<String, Value>,
    prefix: Option<&str>,
    out: &mut Vec<(String, &'a Value)>,
) {
    for (key, value) in node {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(child) => flatten_into(child, Some(path.as_str()), out),
            leaf => out.push((path, leaf)),
        }
    }
}

fn split_leaf(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    }
}

fn insert_nested<'p, I>(
    node: &mut Map<String, Value>,
    parents: &mut I,
    leaf: &str,
    value: Value,
) where
    I: Iterator<Item = &'p str>,
{
    let Some(segment) = parents.next() else {
        node.insert(leaf.to_string(), value);
        return;
    };

    match node
        .entry(segment)
        .or_insert_with(|| Value::Object(Map::new()))
    {
        Value::Object(child) => insert_nested(child, parents, leaf, value),
        slot => {
            let mut child = Map::new();
            insert_nested(&mut child, parents, leaf, value);
            *slot = Value::Object(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_set_nested() {
        let mut doc = Map::new();
        set_path(&mut doc, "device_info.location.lat", json!("37.87"));
        set_path(&mut doc, "device_info.location.lon", json!("-122.27"));
        set_path(&mut doc, "device", json!("r1"));

        assert_eq!(
            Value::Object(doc),
            json!({
                "device": "r1",
                "device_info": {"location": {"lat": "37.87", "lon": "-122.27"}}
            })
        );
    }

    #[test]
    fn test_scalar_intermediate_is_overwritten() {
        let mut doc = object(json!({"a": "scalar"}));
        set_path(&mut doc, "a.b", json!(1));
        assert_eq!(Value::Object(doc), json!({"a": {"b": 1}}));

        // a scalar in the middle of a deeper path keeps its siblings
        let mut doc = object(json!({"a": {"b": 7, "keep": true}}));
        set_path(&mut doc, "a.b.c.d", json!(2));
        assert_eq!(
            Value::Object(doc),
            json!({"a": {"b": {"c": {"d": 2}}, "keep": true}})
        );
    }

    #[test]
    fn test_leaf_replaces_object() {
        let mut doc = object(json!({"a": {"b": 1}}));
        set_path(&mut doc, "a", json!("flat"));
        assert_eq!(Value::Object(doc), json!({"a": "flat"}));
    }

    #[test]
    fn test_strict_rejects_scalar_intermediate() {
        let mut doc = object(json!({"a": {"b": "scalar"}}));
        let err = try_set_path(&mut doc, "a.b.c", json!(1)).unwrap_err();

        assert_eq!(
            err,
            PathConflict {
                path: "a.b.c".to_string(),
                at: "a.b".to_string(),
            }
        );
        assert_eq!(Value::Object(doc), json!({"a": {"b": "scalar"}}));
    }

    #[test]
    fn test_strict_rejects_object_leaf() {
        let mut doc = object(json!({"a": {"b": 1}}));
        let err = try_set_path(&mut doc, "a", json!("flat")).unwrap_err();
        assert_eq!(err.at, "a");
    }

    #[test]
    fn test_strict_allows_scalar_replacement_and_new_branches() {
        let mut doc = object(json!({"a": {"b": 1}}));
        try_set_path(&mut doc, "a.b", json!(2)).unwrap();
        try_set_path(&mut doc, "x.y.z", json!(3)).unwrap();
        assert_eq!(Value::Object(doc), json!({"a": {"b": 2}, "x": {"y": {"z": 3}}}));
    }

    #[test]
    fn test_get_and_flatten() {
        let doc = object(json!({
            "device": "r1",
            "device_info": {"location": {"lat": "1", "lon": "2"}, "os": "junos"},
            "empty": {}
        }));

        assert_eq!(get_path(&doc, "device_info.location.lat"), Some(&json!("1")));
        assert_eq!(get_path(&doc, "device_info.location"), Some(&json!({"lat": "1", "lon": "2"})));
        assert_eq!(get_path(&doc, "device.nope"), None);
        assert_eq!(get_path(&doc, "nope"), None);

        let flat = flatten(&doc)
            .into_iter()
            .map(|(k, v)| (k, v.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            flat,
            [
                ("device".to_string(), json!("r1")),
                ("device_info.location.lat".to_string(), json!("1")),
                ("device_info.location.lon".to_string(), json!("2")),
                ("device_info.os".to_string(), json!("junos")),
            ]
        );
    }

    fn dotted_path() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z]{1,4}", 1..4).prop_map(|segments| segments.join("."))
    }

    proptest! {
        #[test]
        fn prop_set_path_is_idempotent(
            setup in proptest::collection::vec((dotted_path(), "[a-z0-9]{0,6}"), 0..6),
            path in dotted_path(),
            value in "[a-z0-9]{0,6}",
        ) {
            let mut once = Map::new();
            for (p, v) in &setup {
                set_path(&mut once, p, Value::String(v.clone()));
            }
            set_path(&mut once, &path, Value::String(value.clone()));

            let mut twice = once.clone();
            set_path(&mut twice, &path, Value::String(value.clone()));

            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(get_path(&once, &path), Some(&Value::String(value)));
        }
    }
}
