/*!
state.rs - state manipulation.

Tools: tf_state_list, tf_state_show, tf_state_rm, tf_state_mv, tf_import,
tf_taint, tf_untaint.

Read-only queries (list/show) return the primary stream; mutating
operations return both streams concatenated. Resource addresses are
positional, never flags.
*/

use anyhow::Result;
use rmcp::model::JsonObject;

use super::args::req_str;
use super::call_dir;
use crate::config::Settings;

pub async fn list(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["state".to_string(), "list".to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn show(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = show_argv(args)?;
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.primary())
}

pub async fn rm(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = rm_argv(args)?;
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

pub async fn mv(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = mv_argv(args)?;
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

pub async fn import(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = import_argv(args)?;
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

pub async fn taint(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["taint".to_string(), req_str(args, "address")?.to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

pub async fn untaint(settings: &Settings, args: &JsonObject) -> Result<String> {
    let argv = vec!["untaint".to_string(), req_str(args, "address")?.to_string()];
    let out = settings.binary.run(&argv, &call_dir(settings, args)).await?;
    Ok(out.combined())
}

/* ---- Argument List Builders ---- */

fn show_argv(args: &JsonObject) -> Result<Vec<String>> {
    Ok(vec![
        "state".into(),
        "show".into(),
        req_str(args, "address")?.into(),
    ])
}

fn rm_argv(args: &JsonObject) -> Result<Vec<String>> {
    Ok(vec![
        "state".into(),
        "rm".into(),
        req_str(args, "address")?.into(),
    ])
}

fn mv_argv(args: &JsonObject) -> Result<Vec<String>> {
    Ok(vec![
        "state".into(),
        "mv".into(),
        req_str(args, "source")?.into(),
        req_str(args, "destination")?.into(),
    ])
}

fn import_argv(args: &JsonObject) -> Result<Vec<String>> {
    Ok(vec![
        "import".into(),
        req_str(args, "address")?.into(),
        req_str(args, "id")?.into(),
    ])
}

/* ---- Tests ---- */
