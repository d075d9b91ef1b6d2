use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Result block written next to a triangulation artifact.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub code_rev: String,
    pub params: Value,
    pub winding: String,
    pub vertices: usize,
    pub triangles: usize,
    pub area: f64,
    pub outputs: Vec<String>,
}

/// Write `<artifact-stem>.summary.json` and return its path.
pub fn write_summary<P: AsRef<Path>>(artifact: P, summary: &Summary) -> Result<PathBuf> {
    let path = summary_path(artifact.as_ref());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    fs::write(&path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn summary_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("triangulation"));
    name.push(".summary.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, else the runtime variable, else "unknown".
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
