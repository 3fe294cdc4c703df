//! JSON export of patterns

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::geometry::pattern::Pattern;
use crate::io::error::{Result, file_system_error};

/// Serialize a pattern as pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` if the pattern cannot be encoded
pub fn to_json(pattern: &Pattern) -> Result<String> {
    Ok(serde_json::to_string_pretty(pattern)?)
}

/// Write a pattern to `path` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or written, or if the
/// pattern cannot be encoded
pub fn export_json(pattern: &Pattern, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| file_system_error(path, "create json", e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, pattern)?;
    writer
        .flush()
        .map_err(|e| file_system_error(path, "write json", e))
}
