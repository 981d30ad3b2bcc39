use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: command parameters plus the optional run tag.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value, tag: Option<&str>) -> Self {
        Self {
            command,
            params,
            tag: tag.map(str::to_owned),
        }
    }

    /// Provenance document for `outputs`, recorded from `callsite`.
    pub fn to_doc(&self, outputs: &[&Path], callsite: &Location<'_>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "envelope_version": envelope::VERSION,
            "command": self.command,
            "tag": self.tag,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "params": self.params,
            "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>()
        })
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    crate::ensure_parent(&provenance_path)?;
    let doc = payload.to_doc(&[artifact], Location::caller());
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::info!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
