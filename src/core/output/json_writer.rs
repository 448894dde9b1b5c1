//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::RecordRow;
use crate::error::Result;
use crate::message::Record;

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-01 21:05:00", "day": 1, "month": "January", ...}
/// ]
/// ```
pub fn write_json(records: &[Record], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[Record]) -> Result<String> {
    let rows: Vec<RecordRow<'_>> = records.iter().map(RecordRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
