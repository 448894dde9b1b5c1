//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::RecordRow;
use crate::error::Result;
use crate::message::Record;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header row: `timestamp;day;month;year;hour;minute;weekday;sender;message`
/// - Multi-line messages are quoted
/// - Encoding: UTF-8
pub fn write_csv(records: &[Record], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(records: &[Record], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    for record in records {
        writer.serialize(RecordRow::from(record))?;
    }

    writer.flush()?;
    Ok(())
}
