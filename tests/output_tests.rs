//! Tests for record export writers (CSV, JSON, JSONL)

#![cfg(all(feature = "csv-output", feature = "json-output"))]

use chatstat::core::output::{to_csv, to_json, to_jsonl, write_csv, write_json, write_jsonl};
use chatstat::format::{ExportFormat, write_to_format};
use chatstat::{Record, parse_transcript};
use serde::Deserialize;
use std::fs;
use tempfile::tempdir;

fn sample_records() -> Vec<Record> {
    parse_transcript(
        "[01/01/23, 9:05:00 PM] Alice: Hello there
How are you?
[02/01/23, 08:15:00] Bob: Semicolons; and \"quotes\"
[03/01/23, 7:00:00 AM] Иван: Привет 🎉",
    )
}

#[derive(Debug, Deserialize)]
struct Row {
    timestamp: String,
    day: u32,
    month: String,
    year: i32,
    hour: u32,
    minute: u32,
    weekday: String,
    sender: String,
    message: String,
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");

        write_csv(&sample_records(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "timestamp;day;month;year;hour;minute;weekday;sender;message"
        );
    }

    #[test]
    fn test_csv_reads_back() {
        let csv = to_csv(&sample_records()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let rows: Vec<Row> = reader.deserialize().map(Result::unwrap).collect();

        assert_eq!(rows.len(), 3);

        let alice = &rows[0];
        assert_eq!(alice.timestamp, "2023-01-01 21:05:00");
        assert_eq!(alice.day, 1);
        assert_eq!(alice.month, "January");
        assert_eq!(alice.year, 2023);
        assert_eq!(alice.hour, 21);
        assert_eq!(alice.minute, 5);
        assert_eq!(alice.weekday, "Sunday");
        assert_eq!(alice.sender, "Alice");
        assert_eq!(alice.message, "Hello there\nHow are you?");

        assert_eq!(rows[1].message, "Semicolons; and \"quotes\"");
        assert_eq!(rows[2].sender, "Иван");
        assert_eq!(rows[2].hour, 7);
    }

    #[test]
    fn test_csv_empty() {
        let csv = to_csv(&[]).unwrap();
        assert!(csv.is_empty());
    }
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");

        write_json(&sample_records(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let rows: Vec<Row> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].weekday, "Sunday");
        assert_eq!(rows[2].message, "Привет 🎉");
    }

    #[test]
    fn test_json_field_order() {
        let json = to_json(&sample_records()[..1]).unwrap();
        let timestamp = json.find("\"timestamp\"").unwrap();
        let sender = json.find("\"sender\"").unwrap();
        let message = json.find("\"message\"").unwrap();
        assert!(timestamp < sender && sender < message);
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_one_object_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.jsonl");

        write_jsonl(&sample_records(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let row: Row = serde_json::from_str(line).unwrap();
            assert!(!row.sender.is_empty());
        }
    }

    #[test]
    fn test_jsonl_multiline_body_stays_on_one_line() {
        let jsonl = to_jsonl(&sample_records()[..1]).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
        assert!(jsonl.contains("Hello there\\nHow are you?"));
    }

    #[test]
    fn test_jsonl_empty() {
        assert!(to_jsonl(&[]).unwrap().is_empty());
    }
}

// ============================================================================
// Format Dispatch
// ============================================================================

#[test]
fn test_write_to_format_every_format() {
    let dir = tempdir().unwrap();
    let records = sample_records();

    for format in ExportFormat::all() {
        let path = dir.path().join(format!("records.{}", format.extension()));
        write_to_format(&records, &path, *format).unwrap();
        assert_eq!(ExportFormat::from_path(&path).unwrap(), *format);
        assert!(!fs::read_to_string(&path).unwrap().is_empty());
    }
}

#[test]
fn test_write_to_unwritable_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("records.csv");
    let err = write_csv(&sample_records(), &path).unwrap_err();
    assert!(err.is_io());
}
