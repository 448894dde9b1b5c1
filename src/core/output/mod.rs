//! Export writers for clean records.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line - requires `json-output` feature
//!
//! Every format carries the same columns, in this order:
//!
//! | Column | Example |
//! |--------|---------|
//! | `timestamp` | `2023-01-01 21:05:00` |
//! | `day` | `1` |
//! | `month` | `January` |
//! | `year` | `2023` |
//! | `hour` | `21` |
//! | `minute` | `5` |
//! | `weekday` | `Sunday` |
//! | `sender` | `Alice` |
//! | `message` | `Hello there` |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_json, write_jsonl};
//! use chatstat::parse_transcript;
//!
//! let records = parse_transcript("[01/01/23, 9:05:00 PM] Alice: Hello there");
//!
//! write_json(&records, "records.json")?;
//! write_jsonl(&records, "records.jsonl")?;
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use serde::Serialize;

use crate::message::Record;

/// Flat export shape of one record.
#[derive(Debug, Serialize)]
pub struct RecordRow<'a> {
    pub timestamp: String,
    pub day: u32,
    pub month: &'static str,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub weekday: &'static str,
    pub sender: &'a str,
    pub message: &'a str,
}

impl<'a> From<&'a Record> for RecordRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            timestamp: record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            day: record.day,
            month: record.month_name(),
            year: record.year,
            hour: record.hour,
            minute: record.minute,
            weekday: record.weekday_name(),
            sender: &record.sender,
            message: &record.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_row() {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(21, 5, 0)
            .unwrap();
        let record = Record::new("Alice", "Hello there", ts);
        let row = RecordRow::from(&record);

        assert_eq!(row.timestamp, "2023-01-01 21:05:00");
        assert_eq!(row.month, "January");
        assert_eq!(row.weekday, "Sunday");
        assert_eq!(row.minute, 5);
        assert_eq!(row.message, "Hello there");
    }
}
