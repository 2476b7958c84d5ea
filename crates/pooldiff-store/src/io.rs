//! Snapshot file reads and atomic writes

use crate::errors::{io_error, missing_input, Result};
use std::fs;
use std::path::Path;

/// Read a raw or normalized snapshot into memory
///
/// # Errors
///
/// `MissingInput` when the file does not exist, is not readable, or is not
/// valid UTF-8.
pub fn read_snapshot(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| missing_input(path, &e))
}

/// Atomically write bytes to a file
///
/// Creates the parent directory if needed, writes to a sibling temp file and
/// renames it over the target, so readers never see a partial body.
///
/// # Errors
///
/// `Io` when the directory, temp file or rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", parent, e))?;
        }
    }

    let mut temp_name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = target_path.with_file_name(temp_name);

    fs::write(&temp_path, content).map_err(|e| io_error("write_output_temp", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error("rename_output_temp", target_path, e))?;

    Ok(())
}
