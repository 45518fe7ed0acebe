/*!
files.rs - direct filesystem tools under the working directory.

Tools: tf_list_files, tf_read_file, tf_write_file. No subprocess involved.
Relative paths resolve against the per-call directory; absolute paths pass
through unchanged.
*/

use anyhow::{Context, Result, bail};
use rmcp::model::JsonObject;
use std::path::{Path, PathBuf};

use super::args::req_str;
use super::call_dir;
use crate::config::Settings;

/// Extensions surfaced by tf_list_files.
const LISTED_EXTENSIONS: [&str; 3] = [".tf", ".tfvars", ".tfstate"];

pub async fn list_files(settings: &Settings, args: &JsonObject) -> Result<String> {
    let dir = call_dir(settings, args);
    let mut entries = tokio::fs::read_dir(&dir)
        .await
        .with_context(|| format!("failed to list directory: {}", dir.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read directory entry in {}", dir.display()))?
    {
        let name = entry.file_name().to_string_lossy().to_string();
        if LISTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            names.push(name);
        }
    }

    if names.is_empty() {
        return Ok("No Terraform files found".to_string());
    }
    // read_dir order is platform-dependent; sort for a stable reply.
    names.sort();
    Ok(names.join("\n"))
}

pub async fn read_file(settings: &Settings, args: &JsonObject) -> Result<String> {
    let path = resolve_path(&call_dir(settings, args), req_str(args, "file_path")?);
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        bail!("File not found: {}", path.display());
    }
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read file: {}", path.display()))
}

pub async fn write_file(settings: &Settings, args: &JsonObject) -> Result<String> {
    let path = resolve_path(&call_dir(settings, args), req_str(args, "file_path")?);
    let content = req_str(args, "content")?;
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    Ok(format!("File written: {}", path.display()))
}

fn resolve_path(dir: &Path, file_path: &str) -> PathBuf {
    let p = Path::new(file_path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        dir.join(p)
    }
}

/* ---- Tests ---- */
