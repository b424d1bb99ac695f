//! Provenance records written beside CLI artifacts.
//!
//! `fit --out curve.json` also writes `curve.provenance.json` naming the code revision,
//! library version, command and parameters that produced it.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Record `command` and `params` next to `artifact`; returns the sidecar path.
pub fn write_sidecar(artifact: &Path, command: &str, params: Value) -> Result<PathBuf> {
    let sidecar = sidecar_path(artifact);
    let record = json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
        "command": command,
        "params": params,
        "outputs": [artifact.to_string_lossy()],
    });
    ensure_parent(&sidecar)?;
    fs::write(&sidecar, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Create the directory `path` will live in, if it names one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display())),
        _ => Ok(()),
    }
}

/// `dir/name.ext` -> `dir/name.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time) or `git rev-parse HEAD`; "unknown" otherwise.
pub fn current_git_rev() -> String {
    let pinned = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = pinned {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
