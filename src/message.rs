//! Message types flowing through the parsing pipeline.
//!
//! A transcript moves through three shapes:
//!
//! | Type | Produced by | Meaning |
//! |------|-------------|---------|
//! | [`MessageHeader`] | line classifier | Fields of one header line, borrowed from it |
//! | [`RawMessage`] | message assembler | Header plus merged continuation lines |
//! | [`Record`] | normalizer + content filter | Timestamp resolved, calendar fields derived |
//!
//! # Example
//!
//! ```
//! use chatstat::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let record = Record::new("Alice", "Hello there", ts);
//!
//! assert_eq!(record.hour, 21);
//! assert_eq!(record.month_name(), "January");
//! assert_eq!(record.weekday_name(), "Sunday");
//! ```

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

/// AM/PM marker of a 12-hour clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parses `AM`/`PM` in any letter case.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if token.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    /// Returns the canonical upper-case marker.
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields extracted from a line that starts a new message.
///
/// Borrowed from the line it was classified from; the assembler turns it into
/// an owned [`RawMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader<'a> {
    /// Raw `DD/MM/YY` date token.
    pub date: &'a str,
    /// Raw `H:MM:SS` or `HH:MM:SS` time token, without any meridiem.
    pub time: &'a str,
    /// AM/PM marker, absent in 24-hour transcripts.
    pub meridiem: Option<Meridiem>,
    /// Trimmed, non-empty sender name.
    pub sender: &'a str,
    /// Text after the sender's colon, may be empty.
    pub body_start: &'a str,
}

impl MessageHeader<'_> {
    /// Builds the canonical timestamp string: `DD/MM/YY` + space + time, with
    /// the meridiem appended directly when present (`"01/01/23 9:05:00PM"`).
    pub fn timestamp_raw(&self) -> String {
        match self.meridiem {
            Some(meridiem) => format!("{} {}{}", self.date, self.time, meridiem),
            None => format!("{} {}", self.date, self.time),
        }
    }
}

/// A structurally reconstructed message, before timestamp or content checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Canonical timestamp string, see [`MessageHeader::timestamp_raw`].
    pub timestamp_raw: String,
    /// Sender name.
    pub sender: String,
    /// Message body; continuation lines are joined with `\n`.
    pub body: String,
}

impl RawMessage {
    /// Creates a raw message directly from its parts.
    pub fn new(
        timestamp_raw: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_raw: timestamp_raw.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Opens a message from a classified header line.
    pub fn from_header(header: &MessageHeader<'_>) -> Self {
        Self {
            timestamp_raw: header.timestamp_raw(),
            sender: header.sender.to_string(),
            body: header.body_start.to_string(),
        }
    }

    /// Appends a continuation line, right-trimmed, after a newline.
    pub fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line.trim_end());
    }
}

/// A message with a resolved timestamp and derived calendar fields.
///
/// Records returned by [`parse_transcript`](crate::parser::parse_transcript)
/// have also passed the content filter: their body is non-empty and is not a
/// system notice. Aggregation only ever reads records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Sender name.
    pub sender: String,
    /// Message text, direction mark stripped and trimmed.
    pub body: String,
    /// Canonical timestamp string the record was parsed from.
    pub timestamp_raw: String,
    /// Naive local time; no timezone is applied.
    pub timestamp: NaiveDateTime,
    /// Day of month (1-31).
    pub day: u32,
    /// Calendar month.
    pub month: Month,
    /// Four-digit year.
    pub year: i32,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Day of week.
    pub weekday: Weekday,
}

impl Record {
    /// Creates a record from a sender, body and timestamp.
    ///
    /// The canonical raw timestamp is rendered in 24-hour form.
    pub fn new(sender: impl Into<String>, body: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let timestamp_raw = timestamp.format("%d/%m/%y %H:%M:%S").to_string();
        Self::from_parts(sender.into(), body.into(), timestamp_raw, timestamp)
    }

    /// Finalizes a raw message whose timestamp has been resolved.
    pub fn from_raw(raw: RawMessage, timestamp: NaiveDateTime) -> Self {
        Self::from_parts(raw.sender, raw.body, raw.timestamp_raw, timestamp)
    }

    fn from_parts(
        sender: String,
        body: String,
        timestamp_raw: String,
        timestamp: NaiveDateTime,
    ) -> Self {
        // month() is always 1..=12
        let month = Month::try_from(timestamp.month() as u8).unwrap_or(Month::January);

        Self {
            sender,
            body,
            timestamp_raw,
            timestamp,
            day: timestamp.day(),
            month,
            year: timestamp.year(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
            weekday: timestamp.weekday(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Full English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Full English weekday name, e.g. `"Sunday"`.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// Number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
