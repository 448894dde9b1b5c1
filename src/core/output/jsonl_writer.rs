//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::RecordRow;
use crate::error::Result;
use crate::message::Record;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is one compact JSON object with the export columns.
pub fn write_jsonl(records: &[Record], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string, one object per line.
pub fn to_jsonl(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(records: &[Record], writer: &mut W) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, &RecordRow::from(record))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
