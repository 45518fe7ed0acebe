/*!
Tool dispatch module.

One source file per operation area, mirroring the catalog grouping:
  catalog.rs    (descriptors: names, descriptions, input schemas)
  args.rs       (argument extraction over the incoming JSON object)
  lifecycle.rs  (init / validate / plan / apply / destroy / refresh)
  state.rs      (state list/show/rm/mv, import, taint, untaint)
  workspace.rs  (workspace list/select/new/delete)
  inspect.rs    (version, output, providers, graph, show plan, fmt)
  files.rs      (list/read/write under the working directory)

`dispatch` is the fixed name -> handler table. It returns the response
text, or the error the protocol layer flags on the reply. There is no
cross-call state anywhere below this point.
*/

use anyhow::{Result, bail};
use rmcp::model::JsonObject;
use std::path::PathBuf;

pub mod args;
pub mod catalog;
pub mod files;
pub mod inspect;
pub mod lifecycle;
pub mod state;
pub mod workspace;

use crate::config::Settings;

/// Resolve the effective directory for one call: a non-empty `dir` argument
/// wins, otherwise the configured working directory.
pub(crate) fn call_dir(settings: &Settings, args: &JsonObject) -> PathBuf {
    match args::opt_str(args, "dir") {
        Some(d) if !d.is_empty() => PathBuf::from(d),
        _ => settings.working_dir.clone(),
    }
}

/// The fixed dispatch table.
pub async fn dispatch(settings: &Settings, name: &str, args: &JsonObject) -> Result<String> {
    match name {
        "tf_version" => inspect::version(settings, args).await,
        "tf_init" => lifecycle::init(settings, args).await,
        "tf_validate" => lifecycle::validate(settings, args).await,
        "tf_plan" => lifecycle::plan(settings, args).await,
        "tf_apply" => lifecycle::apply(settings, args).await,
        "tf_destroy" => lifecycle::destroy(settings, args).await,
        "tf_output" => inspect::output(settings, args).await,
        "tf_state_list" => state::list(settings, args).await,
        "tf_state_show" => state::show(settings, args).await,
        "tf_state_rm" => state::rm(settings, args).await,
        "tf_state_mv" => state::mv(settings, args).await,
        "tf_import" => state::import(settings, args).await,
        "tf_refresh" => lifecycle::refresh(settings, args).await,
        "tf_fmt" => inspect::fmt(settings, args).await,
        "tf_workspace_list" => workspace::list(settings, args).await,
        "tf_workspace_select" => workspace::select(settings, args).await,
        "tf_workspace_new" => workspace::new(settings, args).await,
        "tf_workspace_delete" => workspace::delete(settings, args).await,
        "tf_providers" => inspect::providers(settings, args).await,
        "tf_graph" => inspect::graph(settings, args).await,
        "tf_taint" => state::taint(settings, args).await,
        "tf_untaint" => state::untaint(settings, args).await,
        "tf_show_plan" => inspect::show_plan(settings, args).await,
        "tf_list_files" => files::list_files(settings, args).await,
        "tf_read_file" => files::read_file(settings, args).await,
        "tf_write_file" => files::write_file(settings, args).await,
        other => bail!("Unknown tool: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terraform::parse_binary;
    use serde_json::json;

    // `true` stands in for the real binary: it exits cleanly and instantly,
    // so dispatch arms can be exercised without Terraform installed.
    fn test_settings() -> Settings {
        Settings {
            working_dir: std::env::temp_dir(),
            binary: parse_binary("true").unwrap(),
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let err = dispatch(&test_settings(), "tf_bogus", &JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: tf_bogus");
    }

    #[tokio::test]
    async fn missing_required_surfaces_before_any_subprocess() {
        // tf_state_show requires `address`; the error must come from the
        // builder, not from attempting to launch anything.
        let err = dispatch(&test_settings(), "tf_state_show", &JsonObject::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing required parameter: address"));
    }

    #[test]
    fn dir_argument_overrides_configured_dir() {
        let settings = test_settings();
        let args = json!({"dir": "/elsewhere"}).as_object().cloned().unwrap();
        assert_eq!(call_dir(&settings, &args), PathBuf::from("/elsewhere"));

        let empty = json!({"dir": ""}).as_object().cloned().unwrap();
        assert_eq!(call_dir(&settings, &empty), settings.working_dir);
        assert_eq!(call_dir(&settings, &JsonObject::new()), settings.working_dir);
    }

    #[tokio::test]
    async fn every_catalog_name_dispatches() {
        // Sanity link between the advertised catalog and the dispatch table:
        // no catalog entry may fall through to the unknown-tool arm. Calls
        // needing a binary or arguments fail for *their* reasons instead.
        for tool in catalog::tools() {
            let result = dispatch(&test_settings(), &tool.name, &JsonObject::new()).await;
            if let Err(e) = result {
                assert!(
                    !e.to_string().starts_with("Unknown tool:"),
                    "catalog entry {} is not dispatchable",
                    tool.name
                );
            }
        }
    }
}
