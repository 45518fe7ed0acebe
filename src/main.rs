use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};

mod config;
mod server;
mod terraform;
mod tools;
mod utils;

/// Terraform MCP server.
///
/// Speaks the Model Context Protocol on stdin/stdout and exposes the
/// Terraform CLI as a fixed catalog of tools (init, plan, apply, state and
/// workspace manipulation, file I/O). Diagnostics go to stderr only.
///
/// Settings resolve flag > env > config file > default:
///   -d / --dir      Base working directory (TERRAFORM_WORKING_DIR env)
///   -b / --binary   Terraform command override (TERRAFORM_BIN env),
///                   may carry leading arguments, e.g. "tofu"
///   --config        Optional JSON or YAML settings file
///
/// Examples:
///   terraform-mcp -d /srv/infra
///   TERRAFORM_BIN=tofu terraform-mcp -vv
///   terraform-mcp --config /etc/terraform-mcp.yaml
#[derive(Parser, Debug)]
#[command(
    name = "terraform-mcp",
    version,
    about = "MCP server exposing the Terraform CLI as agent-callable tools",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Base working directory for Terraform invocations
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    dir: Option<String>,

    /// Terraform command override (may include leading arguments)
    #[arg(short = 'b', long = "binary", value_name = "COMMAND")]
    binary: Option<String>,

    /// Optional settings file (JSON or YAML)
    #[arg(long = "config", value_name = "PATH")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    // Resolve settings; startup problems are fatal, tool failures never are.
    let settings = match config::Settings::resolve(cli.dir, cli.binary, cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid configuration: {e:#}");
            std::process::exit(2);
        }
    };

    crate::log_info!(
        "Terraform MCP server running (dir={}, binary={})",
        settings.working_dir.display(),
        settings.binary.original()
    );

    let service = server::TerraformMcp::new(settings).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
