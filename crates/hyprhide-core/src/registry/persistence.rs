//! Record file persistence
//!
//! One `<address>.json` per hidden window, written atomically via a temp file.

use crate::registry::{errors::RegistryError, types::WindowRecord};
use std::fs;
use std::path::{Path, PathBuf};

pub fn ensure_registry_directory(dir: &Path) -> Result<(), RegistryError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn record_file(dir: &Path, address: &str) -> PathBuf {
    dir.join(format!("{}.json", address))
}

pub fn screenshot_file(dir: &Path, address: &str) -> PathBuf {
    dir.join(format!("{}.png", address))
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.registry.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}

pub fn save_record_to_file(record: &WindowRecord, dir: &Path) -> Result<(), RegistryError> {
    let path = record_file(dir, &record.address);
    let json = serde_json::to_string_pretty(record).map_err(|e| {
        tracing::error!(
            event = "core.registry.serialization_failed",
            address = %record.address,
            error = %e
        );
        RegistryError::Serialization {
            address: record.address.clone(),
            source: e,
        }
    })?;

    let temp_file = path.with_extension("json.tmp");

    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(RegistryError::IoError { source: e });
    }

    if let Err(e) = fs::rename(&temp_file, &path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(RegistryError::IoError { source: e });
    }

    Ok(())
}

/// Parse a record file, checking it belongs to `address`.
fn parse_record(address: &str, content: &str) -> Result<WindowRecord, RegistryError> {
    let record: WindowRecord =
        serde_json::from_str(content).map_err(|e| RegistryError::CorruptRecord {
            address: address.to_string(),
            message: e.to_string(),
        })?;

    if record.address != address {
        return Err(RegistryError::CorruptRecord {
            address: address.to_string(),
            message: format!("file holds a record for '{}'", record.address),
        });
    }

    Ok(record)
}

pub fn load_record_from_file(
    address: &str,
    dir: &Path,
) -> Result<Option<WindowRecord>, RegistryError> {
    let path = record_file(dir, address);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(RegistryError::IoError { source: e }),
    };

    parse_record(address, &content).map(Some)
}

/// Load every readable record in `dir`.
///
/// Unreadable or malformed files are skipped and counted, never fatal.
pub fn load_records_from_files(dir: &Path) -> Result<(Vec<WindowRecord>, usize), RegistryError> {
    let mut records = Vec::new();
    let mut skipped_count = 0;

    if !dir.exists() {
        return Ok((records, skipped_count));
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let Some(address) = path.file_stem().and_then(|s| s.to_str()) else {
            skipped_count += 1;
            continue;
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                skipped_count += 1;
                tracing::warn!(
                    event = "core.registry.load_read_error",
                    file = %path.display(),
                    error = %e,
                    message = "Failed to read record file, skipping"
                );
                continue;
            }
        };

        match parse_record(address, &content) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped_count += 1;
                tracing::warn!(
                    event = "core.registry.load_invalid_record",
                    file = %path.display(),
                    error = %e,
                    message = "Record file is invalid, skipping"
                );
            }
        }
    }

    Ok((records, skipped_count))
}

/// Remove the record file and thumbnail for `address`. Missing files are fine.
pub fn remove_record_files(dir: &Path, address: &str) -> Result<(), RegistryError> {
    for path in [record_file(dir, address), screenshot_file(dir, address)] {
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    event = "core.registry.remove_nonexistent_file",
                    file = %path.display()
                );
            }
            Err(e) => return Err(RegistryError::IoError { source: e }),
        }
    }
    Ok(())
}
