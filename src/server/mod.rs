//! MCP protocol surface.
//!
//! `TerraformMcp` owns the resolved settings and implements the rmcp server
//! handler: a static tool listing plus a call handler routing into the
//! dispatch table. Tool failures become error-flagged responses with an
//! `Error: <message>` text body; the serving loop itself never dies on one.
//! A non-zero Terraform exit is not an error at this layer — the captured
//! text is the answer either way (tf_fmt is the one per-tool exception).

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};
use std::time::Instant;

use crate::config::Settings;
use crate::tools;

#[derive(Clone)]
pub struct TerraformMcp {
    settings: Settings,
}

impl TerraformMcp {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl ServerHandler for TerraformMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Exposes the Terraform CLI as tools: lifecycle (init/validate/plan/apply/destroy), \
                 state and workspace manipulation, and file access in the configured working directory."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: tools::catalog::tools(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let started = Instant::now();
        crate::log_debug!("call {} ({} argument(s))", request.name, arguments.len());

        match tools::dispatch(&self.settings, &request.name, &arguments).await {
            Ok(text) => {
                crate::log_info!(
                    "{} ok in {} ms",
                    request.name,
                    started.elapsed().as_millis()
                );
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                crate::log_info!(
                    "{} failed in {} ms: {e}",
                    request.name,
                    started.elapsed().as_millis()
                );
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {e}"
                ))]))
            }
        }
    }
}
