/*!
lifecycle.rs - the plan/apply cycle.

Tools: tf_init, tf_validate, tf_plan, tf_apply, tf_destroy, tf_refresh.

Each handler builds a fixed argument list (builders are pure and tested
below), runs one subprocess and returns both captured streams concatenated.
`-no-color` is always passed: the consumer is an agent, not a terminal.
*/

use anyhow::Result;
use rmcp::model::JsonObject;

use super::args::{flag, opt_str, var_entries};
use super::call_dir;
use crate::config::Settings;

pub async fn init(settings: &Settings, args: &JsonObject) -> Result<String> {
    let out = settings
        .binary
        .run(&init_argv(args), &call_dir(settings, args))
        .await?;
    Ok(out.combined())
}

pub async fn validate(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["validate".to_string(), "-no-color".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

pub async fn plan(settings: &Settings, args: &JsonObject) -> Result<String> {
    let out = settings
        .binary
        .run(&plan_argv(args), &call_dir(settings, args))
        .await?;
    Ok(out.combined())
}

pub async fn apply(settings: &Settings, args: &JsonObject) -> Result<String> {
    let out = settings
        .binary
        .run(&apply_argv(args), &call_dir(settings, args))
        .await?;
    Ok(out.combined())
}

pub async fn destroy(settings: &Settings, args: &JsonObject) -> Result<String> {
    let out = settings
        .binary
        .run(&destroy_argv(args), &call_dir(settings, args))
        .await?;
    Ok(out.combined())
}

pub async fn refresh(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["refresh".to_string(), "-no-color".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

/* ---- Argument List Builders ---- */

fn init_argv(args: &JsonObject) -> Vec<String> {
    let mut argv: Vec<String> = vec!["init".into(), "-no-color".into()];
    if flag(args, "upgrade") {
        argv.push("-upgrade".into());
    }
    argv
}

fn plan_argv(args: &JsonObject) -> Vec<String> {
    let mut argv: Vec<String> = vec!["plan".into(), "-no-color".into()];
    if let Some(out) = opt_str(args, "out") {
        argv.push(format!("-out={out}"));
    }
    if let Some(target) = opt_str(args, "target") {
        argv.push(format!("-target={target}"));
    }
    for (k, v) in var_entries(args, "var") {
        argv.push(format!("-var={k}={v}"));
    }
    argv
}

fn apply_argv(args: &JsonObject) -> Vec<String> {
    let mut argv: Vec<String> = vec!["apply".into(), "-no-color".into()];
    if flag(args, "auto_approve") {
        argv.push("-auto-approve".into());
    }
    if let Some(target) = opt_str(args, "target") {
        argv.push(format!("-target={target}"));
    }
    for (k, v) in var_entries(args, "var") {
        argv.push(format!("-var={k}={v}"));
    }
    // A saved plan is positional and must come last.
    if let Some(plan_file) = opt_str(args, "plan_file") {
        argv.push(plan_file.into());
    }
    argv
}

fn destroy_argv(args: &JsonObject) -> Vec<String> {
    let mut argv: Vec<String> = vec!["destroy".into(), "-no-color".into()];
    if flag(args, "auto_approve") {
        argv.push("-auto-approve".into());
    }
    if let Some(target) = opt_str(args, "target") {
        argv.push(format!("-target={target}"));
    }
    argv
}

/* ---- Tests ---- */
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: serde_json::Value) -> JsonObject {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn init_base_and_upgrade() {
        assert_eq!(init_argv(&obj(json!({}))), vec!["init", "-no-color"]);
        assert_eq!(
            init_argv(&obj(json!({"upgrade": true}))),
            vec!["init", "-no-color", "-upgrade"]
        );
        assert_eq!(
            init_argv(&obj(json!({"upgrade": false}))),
            vec!["init", "-no-color"]
        );
    }

    #[test]
    fn plan_defaults_to_base_tokens() {
        assert_eq!(plan_argv(&obj(json!({}))), vec!["plan", "-no-color"]);
    }

    #[test]
    fn plan_one_var_flag_per_entry() {
        let argv = plan_argv(&obj(json!({"var": {"a": 1, "b": 2}})));
        assert_eq!(argv, vec!["plan", "-no-color", "-var=a=1", "-var=b=2"]);
    }

    #[test]
    fn plan_out_and_target() {
        let argv = plan_argv(&obj(json!({"out": "p.tfplan", "target": "aws_instance.web"})));
        assert_eq!(
            argv,
            vec![
                "plan",
                "-no-color",
                "-out=p.tfplan",
                "-target=aws_instance.web"
            ]
        );
    }

    #[test]
    fn apply_plan_file_is_last() {
        let argv = apply_argv(&obj(json!({
            "auto_approve": true,
            "var": {"region": "eu-west-1"},
            "plan_file": "saved.tfplan"
        })));
        assert_eq!(
            argv,
            vec![
                "apply",
                "-no-color",
                "-auto-approve",
                "-var=region=eu-west-1",
                "saved.tfplan"
            ]
        );
    }

    #[test]
    fn destroy_flags() {
        assert_eq!(destroy_argv(&obj(json!({}))), vec!["destroy", "-no-color"]);
        assert_eq!(
            destroy_argv(&obj(json!({"auto_approve": true, "target": "x.y"}))),
            vec!["destroy", "-no-color", "-auto-approve", "-target=x.y"]
        );
    }
}
