//! Temporal normalizer: resolves raw timestamps into naive local time.
//!
//! A canonical raw timestamp looks like `"01/01/23 9:05:00PM"` or
//! `"15/06/24 21:30:15"`. The date is always day-first with a two-digit
//! year read as `2000 + YY`. The time is tried against each [`ClockFormat`]
//! in order, and the first that parses wins.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DropReason;
use crate::message::{RawMessage, Record};

/// Clock conventions a transcript timestamp may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockFormat {
    /// `H:MM:SS` followed by `AM`/`PM`, e.g. `9:05:00PM`
    TwelveHour,
    /// `HH:MM:SS` with no meridiem, e.g. `21:05:00`
    TwentyFourHour,
}

impl ClockFormat {
    /// Returns the chrono format string for the time part.
    pub fn time_pattern(self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%I:%M:%S%p",
            ClockFormat::TwentyFourHour => "%H:%M:%S",
        }
    }

    /// Returns the formats in the order they are attempted.
    pub fn all() -> &'static [ClockFormat] {
        &[ClockFormat::TwelveHour, ClockFormat::TwentyFourHour]
    }

    /// Parses a time token under this convention.
    pub fn parse_time(self, token: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(token, self.time_pattern()).ok()
    }
}

/// Parses a `DD/MM/YY` date token, reading the year as `2000 + YY`.
///
/// # Example
///
/// ```
/// use chatstat::parsing::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("01/01/23"), NaiveDate::from_ymd_opt(2023, 1, 1));
/// assert_eq!(parse_date("31/02/23"), None);
/// ```
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let mut parts = token.split('/');
    let day = parse_two_digits(parts.next()?)?;
    let month = parse_two_digits(parts.next()?)?;
    let year = parse_two_digits(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(2000 + i32::try_from(year).ok()?, month, day)
}

fn parse_two_digits(field: &str) -> Option<u32> {
    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parses a canonical raw timestamp.
///
/// Returns the resolved time together with the clock convention that
/// matched, or `None` if no convention applies.
///
/// # Example
///
/// ```
/// use chatstat::parsing::{ClockFormat, parse_timestamp};
/// use chrono::Timelike;
///
/// let (ts, format) = parse_timestamp("01/01/23 9:05:00PM").unwrap();
/// assert_eq!(ts.hour(), 21);
/// assert_eq!(format, ClockFormat::TwelveHour);
///
/// let (ts, format) = parse_timestamp("01/01/23 21:05:00").unwrap();
/// assert_eq!(ts.hour(), 21);
/// assert_eq!(format, ClockFormat::TwentyFourHour);
/// ```
pub fn parse_timestamp(raw: &str) -> Option<(NaiveDateTime, ClockFormat)> {
    let (date_token, time_token) = raw.split_once(' ')?;
    let date = parse_date(date_token)?;

    ClockFormat::all().iter().find_map(|&format| {
        format
            .parse_time(time_token)
            .map(|time| (date.and_time(time), format))
    })
}

/// Resolves a raw message's timestamp and derives its calendar fields.
///
/// Fails with [`DropReason::UnparseableTimestamp`] when neither clock
/// convention applies; the caller drops the message and moves on.
pub fn normalize(raw: RawMessage) -> Result<Record, DropReason> {
    match parse_timestamp(&raw.timestamp_raw) {
        Some((timestamp, _)) => Ok(Record::from_raw(raw, timestamp)),
        None => Err(DropReason::UnparseableTimestamp),
    }
}
