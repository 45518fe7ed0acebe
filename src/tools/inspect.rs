/*!
inspect.rs - read-only inspection and formatting.

Tools: tf_version, tf_output, tf_providers, tf_graph, tf_show_plan, tf_fmt.

All except tf_fmt return the primary stream. tf_fmt is the one tool whose
reply depends on the exit status: a clean run reports `Formatting OK`
(with the list of rewritten files appended when present), a failed run
passes both streams through.
*/

use anyhow::Result;
use rmcp::model::JsonObject;

use super::args::{flag, opt_str, req_str};
use super::call_dir;
use crate::config::Settings;

pub async fn version(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["version".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn output(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = output_argv(args);
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn providers(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["providers".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn graph(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["graph".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn show_plan(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = show_plan_argv(args)?;
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn fmt(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = fmt_argv(args);
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    if out.success {
        if out.stdout.is_empty() {
            Ok("Formatting OK".to_string())
        } else {
            Ok(format!("Formatting OK\n{}", out.stdout))
        }
    } else {
        Ok(out.combined())
    }
}

/* ---- Argument List Builders ---- */

fn output_argv(args: &JsonObject) -> Vec<String> {
    let mut argv: Vec<String> = vec!["output".into(), "-no-color".into()];
    if flag(args, "json") {
        argv.push("-json".into());
    }
    if let Some(name) = opt_str(args, "name") {
        argv.push(name.into());
    }
    argv
}

fn show_plan_argv(args: &JsonObject) -> Result<Vec<String>> {
    Ok(vec![
        "show".into(),
        "-no-color".into(),
        req_str(args, "plan_file")?.into(),
    ])
}

fn fmt_argv(args: &JsonObject) -> Vec<String> {
    let mut argv: Vec<String> = vec!["fmt".into()];
    if flag(args, "check") {
        argv.push("-check".into());
    }
    if flag(args, "recursive") {
        argv.push("-recursive".into());
    }
    argv
}

/* ---- Tests ---- */
