//! Post-parse processing for chatstat.
//!
//! This module contains:
//! - [`filter`] - Date-window filtering of clean records
//! - [`output`] - Export writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstat::core::{
//!     FilterConfig, apply_filters,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, apply_filters};
pub use output::RecordRow;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
