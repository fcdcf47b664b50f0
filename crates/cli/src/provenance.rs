use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a result file: the command and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Write `doc` to `out` (creating parent dirs) plus a `<stem>.provenance.json`
/// sidecar with the git revision, library version and parameters.
pub fn write_with_sidecar(out: &Path, doc: &Value, payload: Payload) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let provenance_path = provenance_path(out);
    let prov = json!({
        "code_rev": current_git_rev(),
        "gridfit_version": gridfit::VERSION,
        "command": payload.command,
        "params": payload.params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::info!(out = %out.display(), sidecar = %provenance_path.display(), "wrote");
    Ok(provenance_path)
}

/// `out/dir/fit.json` → `out/dir/fit.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` when set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
