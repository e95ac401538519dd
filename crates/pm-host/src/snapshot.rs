//! Persisted snapshot plumbing
//!
//! The host keeps one JSON object per widget instance. Widgets update it with
//! functional merges so that keys written by other components survive.

use serde_json::Value;

/// The persisted state slot: a plain JSON object.
pub type StateMap = serde_json::Map<String, Value>;

/// Merge `patch` into `prev`, key by key.
///
/// Keys present in `patch` overwrite; every other key in `prev` is kept
/// untouched. This is the only write shape the host accepts — a full replace
/// would drop state owned by sibling components.
pub fn merge_patch(mut prev: StateMap, patch: StateMap) -> StateMap {
    for (key, value) in patch {
        prev.insert(key, value);
    }
    prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> StateMap {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn merge_preserves_unrelated_keys() {
        let prev = map(json!({"center": [1.0, 2.0], "topping": "X"}));
        let next = merge_patch(prev, map(json!({"zoom": 14.0})));

        assert_eq!(next["zoom"], json!(14.0));
        assert_eq!(next["center"], json!([1.0, 2.0]));
        assert_eq!(next["topping"], json!("X"));
    }

    #[test]
    fn merge_overwrites_patched_keys() {
        let prev = map(json!({"zoom": 2.0}));
        let next = merge_patch(prev, map(json!({"zoom": 12.0})));

        assert_eq!(next["zoom"], json!(12.0));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn merge_into_empty_slot() {
        let next = merge_patch(StateMap::new(), map(json!({"label": "Classic"})));
        assert_eq!(next["label"], json!("Classic"));
    }
}
