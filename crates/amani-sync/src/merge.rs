//! Deep merge of a partial document over the defaults.

use serde_json::Value;

/// Merge `overlay` over `base`, returning the combined value.
///
/// Objects merge key-by-key, recursively, so a remote or cached document
/// missing some fields still yields every key the defaults carry. Arrays
/// and scalars present in the overlay replace the base value wholesale:
/// collections are owned by whichever tier wrote them last, never spliced.
/// An explicit `null` in the overlay keeps the base value: absence of data
/// must not punch holes in the document.
pub fn merge_value(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (base, Value::Null) => base,
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => merge_value(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_wins_on_scalars() {
        let merged = merge_value(json!({"a": 1}), json!({"a": 2}));
        assert_eq!(merged, json!({"a": 2}));
    }

    #[test]
    fn missing_overlay_keys_fall_back_to_base() {
        let merged = merge_value(json!({"a": 1, "b": 2}), json!({"a": 10}));
        assert_eq!(merged, json!({"a": 10, "b": 2}));
    }

    #[test]
    fn objects_merge_key_by_key() {
        // A cached hero missing its subheadline keeps the default one.
        let base = json!({"hero": {"headline": "Default", "subheadline": "Default sub"}});
        let overlay = json!({"hero": {"headline": "Old"}});
        let merged = merge_value(base, overlay);
        assert_eq!(
            merged,
            json!({"hero": {"headline": "Old", "subheadline": "Default sub"}})
        );
    }

    #[test]
    fn arrays_replace_wholesale() {
        let base = json!({"programs": [{"id": "default"}]});
        let overlay = json!({"programs": [{"id": "a"}, {"id": "b"}]});
        let merged = merge_value(base, overlay);
        assert_eq!(merged["programs"].as_array().unwrap().len(), 2);

        // An empty overlay array also wins: it is data, not absence.
        let merged = merge_value(json!({"programs": [{"id": "x"}]}), json!({"programs": []}));
        assert_eq!(merged["programs"], json!([]));
    }

    #[test]
    fn null_overlay_keeps_base() {
        let merged = merge_value(json!({"theme": {"primary_color": "#fff"}}), json!({"theme": null}));
        assert_eq!(merged["theme"]["primary_color"], "#fff");
    }

    #[test]
    fn every_base_key_survives() {
        let base = json!({"a": 1, "b": {"c": 2}, "d": [3]});
        let overlay = json!({"b": {"e": 4}});
        let merged = merge_value(base.clone(), overlay);
        for key in base.as_object().unwrap().keys() {
            assert!(merged.get(key).is_some(), "lost key {key}");
        }
        assert_eq!(merged["b"]["c"], 2);
        assert_eq!(merged["b"]["e"], 4);
    }
}
