/*!
workspace.rs - workspace management.

Tools: tf_workspace_list, tf_workspace_select, tf_workspace_new,
tf_workspace_delete. The three mutating operations share one argv shape:
`workspace <op> <name>`.
*/

use anyhow::Result;
use rmcp::model::JsonObject;

use super::args::req_str;
use super::call_dir;
use crate::config::Settings;

pub async fn list(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["workspace".to_string(), "list".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn select(settings: &Settings, args: &JsonObject) -> Result<String> {
    named_op(settings, args, "select").await
}

pub async fn new(settings: &Settings, args: &JsonObject) -> Result<String> {
    named_op(settings, args, "new").await
}

pub async fn delete(settings: &Settings, args: &JsonObject) -> Result<String> {
    named_op(settings, args, "delete").await
}

async fn named_op(settings: &Settings, args: &JsonObject, op: &str) -> Result<String> {
    let argv = named_argv(op, args)?;
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

fn named_argv(op: &str, args: &JsonObject) -> Result<Vec<String>> {
    Ok(vec![
        "workspace".into(),
        op.into(),
        req_str(args, "name")?.into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: serde_json::Value) -> JsonObject {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn named_ops_share_shape() {
        for op in ["select", "new", "delete"] {
            let argv = named_argv(op, &obj(json!({"name": "staging"}))).unwrap();
            assert_eq!(argv, vec!["workspace", op, "staging"]);
        }
    }

    #[test]
    fn name_is_required() {
        let err = named_argv("select", &obj(json!({}))).unwrap_err();
        assert!(err.to_string().contains("missing required parameter: name"));
    }
}
