//! Whole-file JSON and text I/O.
//!
//! Thin wrappers over `std::fs` and `serde_json` that attach the
//! offending path to every failure. All reads and writes are whole-file
//! and synchronous; a pack file is fully written before the next one is
//! read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, SyncError};

fn io_err(path: &Path, source: std::io::Error) -> SyncError {
    SyncError::Io { path: path.to_path_buf(), source }
}

fn json_err(path: &Path, source: serde_json::Error) -> SyncError {
    SyncError::Json { path: path.to_path_buf(), source }
}

/// Read and parse a whole JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_json::from_str(&text).map_err(|e| json_err(path, e))
}

/// Write a value as pretty-printed JSON (two-space indentation).
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| json_err(path, e))?;
    write_text(path, &text)
}

/// Write a value as compact JSON.
pub fn write_json_compact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string(value).map_err(|e| json_err(path, e))?;
    write_text(path, &text)
}

/// Write a text file, creating parent directories as needed.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    fs::write(path, text).map_err(|e| io_err(path, e))
}

/// List the regular files of a directory, sorted by name.
///
/// Sorting keeps pack processing order (and with it every derived
/// artifact and log line) independent of directory-entry order.
pub fn files_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Remove a directory and everything in it, then recreate it empty.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(dir, e)),
    }
    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))
}
