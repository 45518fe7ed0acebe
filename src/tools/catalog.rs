/*!
catalog.rs - the static tool catalog.

Every operation the server advertises: name, free-text description and a
JSON input schema. Descriptors are fixed and never mutated. Schemas are
plain JSON objects; handlers read the incoming argument maps directly, so
the schema is advisory for the calling agent rather than enforced here.
*/

use rmcp::model::Tool;
use serde_json::{Value, json};
use std::sync::Arc;

/// Build one descriptor. `schema` must be a JSON object.
fn tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    let obj = schema.as_object().cloned().unwrap_or_default();
    Tool::new(name, description, Arc::new(obj))
}

/// The full advertised catalog, in a stable order.
pub fn tools() -> Vec<Tool> {
    vec![
        tool(
            "tf_version",
            "Get Terraform version",
            json!({"type": "object", "properties": {}}),
        ),
        tool(
            "tf_init",
            "Initialize Terraform working directory",
            json!({"type": "object", "properties": {
                "dir": {"type": "string", "description": "Working directory"},
                "upgrade": {"type": "boolean", "description": "Upgrade providers"}
            }}),
        ),
        tool(
            "tf_validate",
            "Validate Terraform configuration",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_plan",
            "Create execution plan",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "out": {"type": "string", "description": "Save plan to file"},
                "target": {"type": "string", "description": "Target specific resource"},
                "var": {"type": "object", "description": "Variables to pass"}
            }}),
        ),
        tool(
            "tf_apply",
            "Apply Terraform changes",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "auto_approve": {"type": "boolean"},
                "plan_file": {"type": "string", "description": "Apply saved plan"},
                "target": {"type": "string"},
                "var": {"type": "object"}
            }}),
        ),
        tool(
            "tf_destroy",
            "Destroy Terraform resources",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "auto_approve": {"type": "boolean"},
                "target": {"type": "string"}
            }}),
        ),
        tool(
            "tf_output",
            "Get Terraform outputs",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "name": {"type": "string", "description": "Specific output name"},
                "json": {"type": "boolean"}
            }}),
        ),
        tool(
            "tf_state_list",
            "List resources in state",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_state_show",
            "Show resource in state",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "address": {"type": "string", "description": "Resource address"}
            }, "required": ["address"]}),
        ),
        tool(
            "tf_state_rm",
            "Remove resource from state",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "address": {"type": "string"}
            }, "required": ["address"]}),
        ),
        tool(
            "tf_state_mv",
            "Move resource in state",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "source": {"type": "string"},
                "destination": {"type": "string"}
            }, "required": ["source", "destination"]}),
        ),
        tool(
            "tf_import",
            "Import existing resource into state",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "address": {"type": "string", "description": "Resource address"},
                "id": {"type": "string", "description": "Resource ID"}
            }, "required": ["address", "id"]}),
        ),
        tool(
            "tf_refresh",
            "Refresh state",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_fmt",
            "Format Terraform files",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "check": {"type": "boolean", "description": "Check only, don't modify"},
                "recursive": {"type": "boolean"}
            }}),
        ),
        tool(
            "tf_workspace_list",
            "List workspaces",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_workspace_select",
            "Select workspace",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "name": {"type": "string"}
            }, "required": ["name"]}),
        ),
        tool(
            "tf_workspace_new",
            "Create workspace",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "name": {"type": "string"}
            }, "required": ["name"]}),
        ),
        tool(
            "tf_workspace_delete",
            "Delete workspace",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "name": {"type": "string"}
            }, "required": ["name"]}),
        ),
        tool(
            "tf_providers",
            "List providers",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_graph",
            "Generate resource graph (DOT format)",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_taint",
            "Mark resource for recreation",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "address": {"type": "string"}
            }, "required": ["address"]}),
        ),
        tool(
            "tf_untaint",
            "Remove taint from resource",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "address": {"type": "string"}
            }, "required": ["address"]}),
        ),
        tool(
            "tf_show_plan",
            "Show saved plan file",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"},
                "plan_file": {"type": "string"}
            }, "required": ["plan_file"]}),
        ),
        tool(
            "tf_list_files",
            "List Terraform files in directory",
            json!({"type": "object", "properties": {
                "dir": {"type": "string"}
            }}),
        ),
        tool(
            "tf_read_file",
            "Read a Terraform file",
            json!({"type": "object", "properties": {
                "file_path": {"type": "string"}
            }, "required": ["file_path"]}),
        ),
        tool(
            "tf_write_file",
            "Write a Terraform file",
            json!({"type": "object", "properties": {
                "file_path": {"type": "string"},
                "content": {"type": "string"}
            }, "required": ["file_path", "content"]}),
        ),
    ]
}
