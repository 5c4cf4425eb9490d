use serde_json::{Map, Value};

/// Deep-merge `overlay` onto `base`, returning a new value.
///
/// Mapping values recurse into the matching sub-mapping of `base` (created
/// when absent or not a mapping); every other overlay value replaces the base
/// value wholesale. Neither input is modified.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match overlay {
        Value::Object(src) => {
            let mut merged = match base {
                Value::Object(dst) => dst.clone(),
                _ => Map::new(),
            };
            for (key, value) in src {
                let next = match value {
                    Value::Object(_) => {
                        let empty = Value::Object(Map::new());
                        deep_merge(merged.get(key).unwrap_or(&empty), value)
                    }
                    _ => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        other => other.clone(),
    }
}

/// Resolve the configuration layers for one switch.
///
/// Precedence (lowest → highest): base, global, switch.
pub fn merge_layers(base: &Value, global: &Value, switch: &Value) -> Value {
    let merged = deep_merge(base, global);
    deep_merge(&merged, switch)
}
