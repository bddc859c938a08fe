//! Shared test utilities for the importguard workspace.
//!
//! Golden-report comparison lives here so the CLI integration tests and any future
//! fixture tooling normalize reports the same way.

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only when the
///    *root* object looks like a report envelope (`schema`, `tool`, `verdict`,
///    `findings` and `data` all present). Finding payloads that happen to share
///    the shape are left alone.
///
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"` at
///    any depth; the placeholder cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_only_touches_envelope_tool_version() {
        let input = json!({
            "schema": "importguard.report.v1",
            "tool": { "name": "importguard", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "finished_at": "2025-01-01T00:00:01Z",
            "verdict": "fail",
            "findings": [
                {
                    "data": { "import": "fmt", "version": "1.0.200" }
                },
                {
                    "data": { "tool": { "name": "go", "version": "1.22" } }
                }
            ],
            "data": { "profile": "strict" }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "importguard");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");

        assert_eq!(result["findings"][0]["data"]["version"], "1.0.200");
        assert_eq!(result["findings"][1]["data"]["tool"]["version"], "1.22");
    }

    #[test]
    fn root_without_envelope_keys_not_normalized() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "nested": { "started_at": "2025-01-01T00:00:00Z" }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["nested"]["started_at"], "__TIMESTAMP__");
    }
}
