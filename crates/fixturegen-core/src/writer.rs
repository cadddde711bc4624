//! Fixture file serialization and writing
//!
//! Each fixture file is a pretty-printed JSON array (2-space indent) of
//! [`ROWS_PER_FILE`] expanded rows, named `f{index}.json`. Existing files
//! are replaced unconditionally.

use std::path::{Path, PathBuf};

use rand::Rng;
use serde_json::Value;

use crate::row::generate_row;

/// Rows per fixture file.
pub const ROWS_PER_FILE: usize = 50;

/// What one call to [`write_fixture`] produced, for operator reporting.
#[derive(Debug, Clone)]
pub struct FixtureSummary {
    /// Path of the written file
    pub path: PathBuf,
    /// Number of rows in the array
    pub rows: usize,
    /// Serialized size in bytes
    pub bytes: u64,
}

/// Filename for a fixture index: `f0.json`, `f1.json`, ...
pub fn fixture_filename(index: u32) -> String {
    format!("f{index}.json")
}

/// Generate [`ROWS_PER_FILE`] rows and write them to `dir/f{index}.json`.
///
/// The whole array is built in memory, serialized once, then written with a
/// single blocking call. The CLI passes the current directory for `dir`;
/// tests pass a tempdir.
///
/// # Errors
///
/// Returns [`WriteError::Io`] if the file cannot be created or written.
/// Serialization cannot fail for the value domain the row generator emits.
pub fn write_fixture(
    dir: &Path,
    index: u32,
    rng: &mut impl Rng,
) -> Result<FixtureSummary, WriteError> {
    let rows: Vec<Value> = (0..ROWS_PER_FILE).map(|_| generate_row(rng)).collect();
    let json = serde_json::to_string_pretty(&Value::Array(rows))
        .map_err(|e| WriteError::Serialize(e.to_string()))?;

    let path = dir.join(fixture_filename(index));
    std::fs::write(&path, &json).map_err(|e| WriteError::Io(path.clone(), e.to_string()))?;

    Ok(FixtureSummary {
        path,
        rows: ROWS_PER_FILE,
        bytes: json.len() as u64,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("write {}: {}", .0.display(), .1)]
    Io(PathBuf, String),
    #[error("serialize: {0}")]
    Serialize(String),
}
