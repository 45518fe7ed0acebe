//! Terraform binary handling: configured-command parsing and one-shot
//! subprocess execution.
//!
//! parse_binary -> BinarySpec { program + leading args }
//! BinarySpec::run -> CommandOutput (both streams captured, fire-and-wait)
//! Output policies: combined (stdout then stderr) / primary (stdout, else stderr).
//!
use anyhow::{Context, Result, bail};
use shell_words::split as shell_split;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// A parsed representation of the configured Terraform command line.
///
/// It retains the original input for diagnostics. The configured value may
/// carry leading arguments (a wrapper invocation, an alternative binary such
/// as `tofu`); those are prepended to every per-tool argument list.
#[derive(Debug, Clone)]
pub struct BinarySpec {
    original: String,
    program: String,
    args: Vec<String>,
}

impl BinarySpec {
    /// Returns the original user-supplied form.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Run the binary with `argv` appended, inside `dir`, and wait for exit.
    ///
    /// Exactly one child process per call. Both output streams are captured
    /// in full; stdin is closed because the server's own stdin carries the
    /// MCP protocol stream. There is no timeout: a hung command hangs the
    /// call.
    pub async fn run(&self, argv: &[String], dir: &Path) -> Result<CommandOutput> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .args(argv)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| {
                format!("failed to launch '{}' in {}", self.original, dir.display())
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

impl fmt::Display for BinarySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program)
        } else {
            write!(f, "{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Captured result of a finished invocation.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CommandOutput {
    /// Both streams, stdout first. Mutating operations return this so
    /// stderr diagnostics survive even on success.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    /// Stdout when non-empty, stderr otherwise. Read-only queries return
    /// this: their useful payload is on exactly one stream.
    pub fn primary(&self) -> String {
        if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            self.stdout.clone()
        }
    }
}

/// Parse a configured binary value into a structured `BinarySpec`.
///
/// Parsing Strategy:
/// 1. Split with shell-style rules (quoting respected).
/// 2. Reject empty input and empty program tokens.
/// 3. Provide contextual errors.
///
/// Examples:
/// - "terraform" -> program only
/// - "tofu" -> program only
/// - "env TF_LOG=debug terraform" -> program + leading args
pub fn parse_binary(raw: &str) -> Result<BinarySpec> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("Binary command is empty");
    }

    let parts =
        shell_split(trimmed).context("Failed to parse binary command line (shell splitting)")?;
    if parts.is_empty() {
        bail!("No tokens produced when parsing binary command");
    }
    let program = parts[0].clone();
    if program.is_empty() {
        bail!("Empty program name in binary command");
    }
    let args = parts[1..].to_vec();
    Ok(BinarySpec {
        original: raw.to_string(),
        program,
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let spec = parse_binary("terraform").unwrap();
        assert_eq!(spec.program, "terraform");
        assert!(spec.args.is_empty());
        assert_eq!(spec.to_string(), "terraform");
    }

    #[test]
    fn parse_with_leading_args() {
        let spec = parse_binary("env TF_LOG=debug terraform").unwrap();
        assert_eq!(spec.program, "env");
        assert_eq!(spec.args, vec!["TF_LOG=debug", "terraform"]);
    }

    #[test]
    fn parse_quoted() {
        let spec = parse_binary(r#"terraform -chdir="/tmp/my dir""#).unwrap();
        assert_eq!(spec.args.len(), 1);
        assert_eq!(spec.args[0], "-chdir=/tmp/my dir");
    }

    #[test]
    fn empty_binary_rejected() {
        let err = parse_binary("   ").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn output_policies() {
        let both = CommandOutput {
            stdout: "out\n".into(),
            stderr: "err\n".into(),
            success: true,
        };
        assert_eq!(both.combined(), "out\nerr\n");
        assert_eq!(both.primary(), "out\n");

        let stderr_only = CommandOutput {
            stdout: String::new(),
            stderr: "err\n".into(),
            success: false,
        };
        assert_eq!(stderr_only.primary(), "err\n");
    }

    #[tokio::test]
    async fn run_captures_stdout() {
        let spec = parse_binary("echo").unwrap();
        let out = spec
            .run(&["hello".to_string()], Path::new("."))
            .await
            .unwrap();
        assert!(out.success);
        assert_eq!(out.stdout.trim(), "hello");
    }
}
