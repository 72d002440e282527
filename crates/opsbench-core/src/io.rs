//! Reading and writing summary files.

use crate::error::Result;
use crate::result::RunSummary;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the indented JSON summary to `path`, creating parent directories.
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(path.to_path_buf())
}

/// Read a previously written summary file.
pub fn read_summary(path: &Path) -> Result<RunSummary> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
