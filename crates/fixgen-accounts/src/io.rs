//! JSON file helpers.
//!
//! Output files are replaced atomically: content is written to a temporary
//! file in the destination directory and renamed over the target only once
//! it is complete, so a failed run never leaves a truncated file behind.
//! The replacement keeps the destination's permissions; a new file gets the
//! same mode a plain `std::fs::write` would give it.

use crate::{AccountsError, Result};
use fixgen_types::AccountRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Reads and parses a JSON file.
///
/// # Errors
///
/// Returns [`AccountsError::Read`] if the file cannot be read and
/// [`AccountsError::Parse`] if it does not hold the expected JSON.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| AccountsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AccountsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON array of account records.
///
/// # Errors
///
/// See [`read_json`].
pub fn read_records(path: &Path) -> Result<Vec<AccountRecord>> {
    read_json(path)
}

/// Serializes `value` as pretty JSON (2-space indent).
///
/// # Errors
///
/// Returns [`AccountsError::Json`] if the value cannot be encoded.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `value` as pretty JSON, atomically replacing `path`.
///
/// # Errors
///
/// Returns [`AccountsError::Json`] on encoding failure and
/// [`AccountsError::Write`] if the destination cannot be replaced.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = to_pretty_json(value)?;
    write_atomic(path, content.as_bytes())
}

/// Atomically replaces `path` with `bytes`.
///
/// # Errors
///
/// Returns [`AccountsError::Write`] if the temporary file cannot be created,
/// written, or renamed over the destination.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| AccountsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_builder().tempfile_in(dir).map_err(write_err)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}

/// Temp files are created `0o666` minus the umask instead of tempfile's
/// private `0o600`.
#[cfg(unix)]
fn temp_builder<'a, 'b>() -> tempfile::Builder<'a, 'b> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder<'a, 'b>() -> tempfile::Builder<'a, 'b> {
    tempfile::Builder::new()
}
