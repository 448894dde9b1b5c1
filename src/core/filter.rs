//! Restrict clean records to a date window.
//!
//! This module provides [`FilterConfig`] for defining the window and
//! [`apply_filters`] for applying it before aggregation.
//!
//! | Bound | Method | Description |
//! |-------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//!
//! # Example
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chatstat::parse_transcript;
//!
//! # fn main() -> chatstat::Result<()> {
//! let records = parse_transcript("\
//! [01/01/24, 12:00:00] Alice: Old
//! [15/06/24, 12:00:00] Alice: New
//! ");
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! Both bounds are inclusive. Timestamps are naive local time, so the window
//! is compared without any timezone conversion.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ChatstatError, Result};
use crate::message::Record;

/// Inclusive time window over clean records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records at or after this time.
    pub after: Option<NaiveDateTime>,

    /// Include only records at or before this time.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a filter that lets every record through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first included day, `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let date = parse_day(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the last included day, `YYYY-MM-DD`.
    ///
    /// The whole day is included, up to `23:59:59`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let end_of_day = parse_day(date_str)?
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatstatError::invalid_date(date_str))?;
        self.before = Some(end_of_day);
        Ok(self)
    }

    /// Sets the lower bound directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the upper bound directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the record falls inside the window.
    pub fn matches(&self, record: &Record) -> bool {
        let ts = record.timestamp;
        !(self.after.is_some_and(|after| ts < after)
            || self.before.is_some_and(|before| ts > before))
    }
}

fn parse_day(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Keeps the records inside the window, in order.
///
/// Returns the input unchanged when no bound is set.
pub fn apply_filters(records: Vec<Record>, config: &FilterConfig) -> Vec<Record> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| config.matches(record))
        .collect()
}
