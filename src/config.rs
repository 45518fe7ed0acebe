//! Settings resolution for the server.
//!
//! Every setting resolves CLI flag > environment variable > config file >
//! built-in default. The config file is optional and may be JSON or YAML
//! (picked by extension, JSON default).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::terraform::{BinarySpec, parse_binary};

/// Environment fallback for the base working directory.
pub const WORKING_DIR_ENV: &str = "TERRAFORM_WORKING_DIR";
/// Environment fallback for the Terraform binary override.
pub const BINARY_ENV: &str = "TERRAFORM_BIN";

const DEFAULT_BINARY: &str = "terraform";

/// Contents of an optional settings file. All keys optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub working_dir: Option<String>,
    pub binary: Option<String>,
}

/// Fully resolved server settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base directory for Terraform invocations and file tools. Individual
    /// calls may override it with a `dir` argument.
    pub working_dir: PathBuf,
    /// The external command to invoke for every Terraform tool.
    pub binary: BinarySpec,
}

impl Settings {
    /// Resolve settings from CLI flags, the environment and an optional
    /// config file.
    pub fn resolve(
        dir_flag: Option<String>,
        binary_flag: Option<String>,
        config_path: Option<&str>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(p) => load_config_file(p)?,
            None => FileConfig::default(),
        };
        Self::from_parts(dir_flag, binary_flag, file)
    }

    /// Precedence merge, separated from I/O so it can be tested directly.
    fn from_parts(
        dir_flag: Option<String>,
        binary_flag: Option<String>,
        file: FileConfig,
    ) -> Result<Self> {
        let working_dir = match dir_flag
            .or_else(|| env_nonempty(WORKING_DIR_ENV))
            .or(file.working_dir)
        {
            Some(d) => PathBuf::from(d),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let binary_raw = binary_flag
            .or_else(|| env_nonempty(BINARY_ENV))
            .or(file.binary)
            .unwrap_or_else(|| DEFAULT_BINARY.to_string());
        let binary = parse_binary(&binary_raw)
            .with_context(|| format!("Invalid binary setting: '{binary_raw}'"))?;

        Ok(Self {
            working_dir,
            binary,
        })
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Load a settings file, choosing the parser by extension.
fn load_config_file(path: &str) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {path}"))?;
    let lower = path.to_ascii_lowercase();

    if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        serde_yaml::from_str(&raw).context("failed to parse YAML config file")
    } else {
        serde_json::from_str(&raw).context("failed to parse JSON config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_file() {
        let file = FileConfig {
            working_dir: Some("/from/file".into()),
            binary: Some("tofu".into()),
        };
        let s = Settings::from_parts(Some("/from/flag".into()), None, file).unwrap();
        assert_eq!(s.working_dir, PathBuf::from("/from/flag"));
        assert_eq!(s.binary.original(), "tofu");
    }

    #[test]
    fn defaults_apply() {
        let s = Settings::from_parts(None, None, FileConfig::default()).unwrap();
        assert_eq!(s.binary.original(), "terraform");
        assert!(s.working_dir.is_absolute());
    }

    #[test]
    fn invalid_binary_rejected() {
        let err = Settings::from_parts(None, Some("  ".into()), FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid binary setting"));
    }

    #[test]
    fn config_file_json_and_yaml() {
        let dir = std::env::temp_dir();
        // Using files in the system temp directory instead of the `tempfile` crate.
        let json_path = dir.join("terraform_mcp_cfg_test.json");
        std::fs::write(&json_path, r#"{ "working_dir": "/w", "binary": "tofu" }"#).unwrap();
        let cfg = load_config_file(json_path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.working_dir.as_deref(), Some("/w"));
        assert_eq!(cfg.binary.as_deref(), Some("tofu"));

        let yaml_path = dir.join("terraform_mcp_cfg_test.yaml");
        std::fs::write(&yaml_path, "working_dir: /y\n").unwrap();
        let cfg = load_config_file(yaml_path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.working_dir.as_deref(), Some("/y"));
        assert!(cfg.binary.is_none());
    }

    #[test]
    fn missing_config_file_errors() {
        let err = load_config_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
