use serde_json::{Map, Value};

/// Applies an RFC 7386 merge patch to `target` in place.
///
/// Object fields merge recursively, `null` deletes a field, and any
/// non-object patch replaces the target wholesale.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    match patch {
        Value::Object(entries) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Value::Object(fields) = target {
                for (key, value) in entries {
                    if value.is_null() {
                        fields.remove(key);
                    } else {
                        merge_patch(fields.entry(key.clone()).or_insert(Value::Null), value);
                    }
                }
            }
        }
        other => *target = other.clone(),
    }
}
