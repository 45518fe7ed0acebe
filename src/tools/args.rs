/*!
args.rs - argument extraction over the incoming MCP argument object.

Focus:
  - opt_str / req_str: optional vs required string parameters
  - flag: present-and-true boolean switches
  - var_entries: flat key/value variable objects -> (name, rendered value)
  - scalar_to_string: JSON scalar rendering for argv embedding

Raw serde_json access only. Beyond required parameters there is no
independent validation; the external command reports everything else
itself.
*/

use anyhow::{Result, bail};
use rmcp::model::JsonObject;
use serde_json::Value;

/// Optional string parameter. Non-string values are ignored.
pub fn opt_str<'a>(args: &'a JsonObject, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

/// Required string parameter.
pub fn req_str<'a>(args: &'a JsonObject, key: &str) -> Result<&'a str> {
    match opt_str(args, key) {
        Some(s) => Ok(s),
        None => bail!("missing required parameter: {}", key),
    }
}

/// Boolean switch: only a literal JSON `true` enables it.
pub fn flag(args: &JsonObject, key: &str) -> bool {
    matches!(args.get(key), Some(Value::Bool(true)))
}

/// Flat object parameter rendered as (key, value) pairs, one per entry in
/// mapping order. A missing or non-object value yields no entries.
pub fn var_entries(args: &JsonObject, key: &str) -> Vec<(String, String)> {
    let Some(obj) = args.get(key).and_then(|v| v.as_object()) else {
        return Vec::new();
    };
    obj.iter()
        .map(|(k, v)| (k.clone(), scalar_to_string(v)))
        .collect()
}

/// Render a JSON scalar for embedding in an argv token: strings verbatim
/// (no quotes), everything else via its JSON display form.
pub fn scalar_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/* ---- Tests ---- */
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> JsonObject {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn required_present_and_missing() {
        let args = obj(json!({"address": "aws_instance.web"}));
        assert_eq!(req_str(&args, "address").unwrap(), "aws_instance.web");

        let err = req_str(&args, "id").unwrap_err();
        assert!(err.to_string().contains("missing required parameter: id"));
    }

    #[test]
    fn flag_only_true_counts() {
        let args = obj(json!({"a": true, "b": false, "c": "true", "d": 1}));
        assert!(flag(&args, "a"));
        assert!(!flag(&args, "b"));
        assert!(!flag(&args, "c"), "string 'true' is not a switch");
        assert!(!flag(&args, "d"));
        assert!(!flag(&args, "missing"));
    }

    #[test]
    fn var_entries_render_scalars() {
        let args = obj(json!({"var": {"a": 1, "b": "x", "c": true}}));
        let entries = var_entries(&args, "var");
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x".to_string()),
                ("c".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn var_entries_non_object_is_empty() {
        let args = obj(json!({"var": "not-a-map"}));
        assert!(var_entries(&args, "var").is_empty());
        assert!(var_entries(&args, "missing").is_empty());
    }
}
