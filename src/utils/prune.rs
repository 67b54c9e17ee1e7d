// Recursive removal of empty values from JSON documents
//
// Only "", {}, [] and null count as empty. `false` and `0` are meaningful
// values and always survive.

use serde_json::{Map, Value};

/// What to do with an object member whose value pruned away to nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Keep the key, with a null value
    KeepKeysAsNull,
    /// Remove the key entirely
    DropKeys,
}

/// Prune empty values from `value`, recursing into objects and arrays.
///
/// Returns `None` when the value itself is empty after pruning. Array
/// elements that prune away are always removed, regardless of the policy.
pub fn prune_empty(value: &Value, policy: EmptyPolicy) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Object(map) => prune_map(map, policy).map(Value::Object),
        Value::Array(items) => prune_list(items, policy).map(Value::Array),
        other => Some(other.clone()),
    }
}

/// Prune every member of an object
pub fn prune_map(map: &Map<String, Value>, policy: EmptyPolicy) -> Option<Map<String, Value>> {
    let mut cleaned = Map::new();
    for (key, value) in map {
        match prune_empty(value, policy) {
            Some(v) => {
                cleaned.insert(key.clone(), v);
            }
            None if policy == EmptyPolicy::KeepKeysAsNull => {
                cleaned.insert(key.clone(), Value::Null);
            }
            None => {}
        }
    }

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Prune every element of an array, dropping the ones that end up empty
pub fn prune_list(items: &[Value], policy: EmptyPolicy) -> Option<Vec<Value>> {
    let cleaned: Vec<Value> = items
        .iter()
        .filter_map(|item| prune_empty(item, policy))
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(prune_empty(&json!(""), EmptyPolicy::DropKeys), None);
        assert_eq!(prune_empty(&Value::Null, EmptyPolicy::DropKeys), None);
        assert_eq!(prune_empty(&json!(false), EmptyPolicy::DropKeys), Some(json!(false)));
        assert_eq!(prune_empty(&json!(0), EmptyPolicy::DropKeys), Some(json!(0)));
        assert_eq!(prune_empty(&json!("x"), EmptyPolicy::DropKeys), Some(json!("x")));
    }

    #[test]
    fn test_drop_keys() {
        let doc = json!({
            "name": "task",
            "done": false,
            "count": 0,
            "note": "",
            "subtasks": [],
            "meta": {},
            "owner": null
        });
        let pruned = prune_empty(&doc, EmptyPolicy::DropKeys).unwrap();
        assert_eq!(pruned, json!({"name": "task", "done": false, "count": 0}));
    }

    #[test]
    fn test_keep_keys_as_null() {
        let doc = json!({"name": "task", "note": "", "subtasks": [], "done": false});
        let pruned = prune_empty(&doc, EmptyPolicy::KeepKeysAsNull).unwrap();
        assert_eq!(
            pruned,
            json!({"name": "task", "note": null, "subtasks": null, "done": false})
        );
    }

    #[test]
    fn test_nested_structures_collapse() {
        let doc = json!({
            "a": {"b": {"c": ""}},
            "list": [[], {}, "", null, [""]],
            "keep": [{"x": 1, "y": ""}]
        });
        let pruned = prune_empty(&doc, EmptyPolicy::DropKeys).unwrap();
        assert_eq!(pruned, json!({"keep": [{"x": 1}]}));
    }

    #[test]
    fn test_fully_empty_document() {
        assert_eq!(prune_empty(&json!({}), EmptyPolicy::DropKeys), None);
        assert_eq!(prune_empty(&json!({"a": [], "b": ""}), EmptyPolicy::DropKeys), None);
    }
}
