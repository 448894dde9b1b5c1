//! Export formats for clean records.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::format::{ExportFormat, to_format_string};
//! use chatstat::parse_transcript;
//! use std::path::Path;
//!
//! let records = parse_transcript("[01/01/23, 9:05:00 PM] Alice: Hello there");
//!
//! let format = ExportFormat::from_path(Path::new("records.jsonl"))?;
//! assert_eq!(format, ExportFormat::Jsonl);
//!
//! let jsonl = to_format_string(&records, format)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};
use crate::message::Record;

/// File format for exporting clean records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// One JSON object per line
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Json, ExportFormat::Jsonl]
    }

    /// Picks the format from a file extension, case-insensitively.
    ///
    /// `.ndjson` is read as JSONL.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        ext.parse().map_err(|_| {
            ChatstatError::invalid_format(
                "export",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }

    fn required_feature(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv-output",
            ExportFormat::Json | ExportFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ChatstatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(ChatstatError::invalid_format(
                "export",
                format!("Unknown format: '{s}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }
}

fn feature_disabled(format: ExportFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "export",
        format!(
            "{format} export requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

/// Writes records to a file in the given format.
#[allow(unused_variables)]
pub fn write_to_format(records: &[Record], path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders records as a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(records: &[Record], format: ExportFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(records),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::to_json(records),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
