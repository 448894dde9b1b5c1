//! Transcript parser: composes the pipeline stages into one call.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::TranscriptParser;
//!
//! let text = "\
//! [01/01/23, 9:05:00 PM] Alice: Hello there
//! How are you?
//! [01/01/23, 9:06:00 PM] Bob: image omitted
//! ";
//!
//! let transcript = TranscriptParser::new().parse_str(text);
//! assert_eq!(transcript.len(), 1);
//! assert_eq!(transcript.stats().system_notices, 1);
//!
//! let alice = &transcript.records()[0];
//! assert_eq!(alice.body, "Hello there\nHow are you?");
//! assert_eq!(alice.hour, 21);
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::error::{ChatstatError, DropReason, Result};
use crate::message::Record;
use crate::parsing::{Assembler, NoticeFilter, normalize};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Counters collected while parsing one transcript.
///
/// Every raw message ends up in exactly one of `records`,
/// `unparseable_timestamps`, `empty_bodies` or `system_notices`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines in the input.
    pub lines: usize,
    /// Lines that opened a message.
    pub header_lines: usize,
    /// Lines discarded before the first header.
    pub skipped_lines: usize,
    /// Messages emitted by the assembler.
    pub raw_messages: usize,
    pub unparseable_timestamps: usize,
    pub empty_bodies: usize,
    pub system_notices: usize,
    /// Clean records kept.
    pub records: usize,
}

impl ParseStats {
    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::UnparseableTimestamp => self.unparseable_timestamps += 1,
            DropReason::EmptyBody => self.empty_bodies += 1,
            DropReason::SystemNotice => self.system_notices += 1,
        }
    }

    /// Total messages dropped for any reason.
    pub fn dropped(&self) -> usize {
        self.unparseable_timestamps + self.empty_bodies + self.system_notices
    }

    /// Share of raw messages that survived, in percent.
    pub fn retention_ratio(&self) -> f64 {
        if self.raw_messages == 0 {
            return 0.0;
        }
        self.records as f64 / self.raw_messages as f64 * 100.0
    }
}

/// Clean records of one transcript plus the statistics of their parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    records: Vec<Record>,
    stats: ParseStats,
}

impl Transcript {
    /// Clean records in transcript order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fails with [`ChatstatError::EmptyTranscript`] when nothing survived.
    ///
    /// ```rust
    /// use chatstat::parser::TranscriptParser;
    ///
    /// let transcript = TranscriptParser::new().parse_str("no headers here");
    /// assert!(transcript.ensure_usable().unwrap_err().is_empty_transcript());
    /// ```
    pub fn ensure_usable(self) -> Result<Self> {
        if self.records.is_empty() {
            return Err(ChatstatError::EmptyTranscript);
        }
        Ok(self)
    }

    /// Sorted distinct sender names.
    pub fn senders(&self) -> Vec<&str> {
        crate::analysis::senders(&self.records)
    }
}

/// Parser for bracketed chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    notices: NoticeFilter,
}

impl TranscriptParser {
    /// Creates a parser with the default notice list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom notice rules.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let notices = NoticeFilter::from_config(&config)?;
        Ok(Self { config, notices })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript file.
    ///
    /// The file must be UTF-8; a leading byte-order mark is ignored.
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatstatError::utf8(format!("transcript {}", path.display()), e))?;
        Ok(self.parse_str(&text))
    }

    /// Parses transcript text already held in memory.
    ///
    /// Never fails: messages that cannot be used are dropped and counted.
    pub fn parse_str(&self, text: &str) -> Transcript {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut stats = ParseStats::default();

        let mut assembler = Assembler::new();
        let mut raw_messages = Vec::new();
        for line in text.lines() {
            stats.lines += 1;
            raw_messages.extend(assembler.push(line));
        }
        stats.header_lines = assembler.header_lines();
        stats.skipped_lines = assembler.skipped_lines();
        raw_messages.extend(assembler.finish());
        stats.raw_messages = raw_messages.len();

        let mut records = Vec::with_capacity(raw_messages.len());
        for (index, raw) in raw_messages.into_iter().enumerate() {
            match normalize(raw).and_then(|record| self.notices.check(record)) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    trace!(message = index, %reason, "dropped message");
                    stats.record_drop(reason);
                }
            }
        }
        stats.records = records.len();

        debug!(
            lines = stats.lines,
            header_lines = stats.header_lines,
            raw_messages = stats.raw_messages,
            unparseable_timestamps = stats.unparseable_timestamps,
            empty_bodies = stats.empty_bodies,
            system_notices = stats.system_notices,
            records = stats.records,
            "parsed transcript"
        );

        Transcript { records, stats }
    }
}

/// Parses transcript text into clean records with the default rules.
///
/// Returns an empty vector when no header lines are found or every message
/// is dropped.
///
/// # Example
///
/// ```rust
/// use chatstat::parse_transcript;
///
/// let records = parse_transcript("[15/06/24, 21:30:15] Bob: Evening all");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].sender, "Bob");
///
/// assert!(parse_transcript("").is_empty());
/// ```
pub fn parse_transcript(text: &str) -> Vec<Record> {
    TranscriptParser::new().parse_str(text).into_records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use std::io::Write;

    #[test]
    fn test_hello_there_scenario() {
        let records = parse_transcript(
            "[01/01/23, 9:05:00 PM] Alice: Hello there\nHow are you?",
        );
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.sender, "Alice");
        assert_eq!(r.body, "Hello there\nHow are you?");
        assert_eq!(r.hour, 21);
        assert_eq!(r.weekday, Weekday::Sun);
        assert_eq!(r.month, Month::January);
        assert_eq!(r.year, 2023);
    }

    #[test]
    fn test_encryption_banner_only() {
        let transcript = TranscriptParser::new().parse_str(
            "[01/01/23, 10:00:00] System: Messages and calls are end-to-end encrypted.",
        );
        assert!(transcript.is_empty());
        assert_eq!(transcript.stats().system_notices, 1);
        assert!(transcript.ensure_usable().is_err());
    }

    #[test]
    fn test_stats_account_for_every_message() {
        let text = "\
Exported chat
[01/01/23, 10:00:00] Alice: hi
[01/01/23, 13:00:00 PM] Bob: bad clock
[01/01/23, 10:02:00] Carol:
[01/01/23, 10:03:00] Dave: video omitted
[01/01/23, 10:04:00] Erin: bye
";
        let transcript = TranscriptParser::new().parse_str(text);
        let stats = transcript.stats();

        assert_eq!(stats.lines, 6);
        assert_eq!(stats.skipped_lines, 1);
        assert_eq!(stats.header_lines, 5);
        assert_eq!(stats.raw_messages, 5);
        assert_eq!(stats.unparseable_timestamps, 1);
        assert_eq!(stats.empty_bodies, 1);
        assert_eq!(stats.system_notices, 1);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.dropped() + stats.records, stats.raw_messages);
        assert!((stats.retention_ratio() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let records = parse_transcript("\u{FEFF}[01/01/23, 10:00:00] Alice: hi");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records =
            parse_transcript("[01/01/23, 10:00:00] Alice: hi\r\nthere\r\n[01/01/23, 10:01:00] Bob: yo\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body, "hi\nthere");
    }

    #[test]
    fn test_idempotent() {
        let text = "[01/01/23, 10:00:00] Alice: one\n[01/01/23, 10:01:00] Bob: two\nmore";
        assert_eq!(parse_transcript(text), parse_transcript(text));
    }

    #[test]
    fn test_disabled_notice_filter() {
        let parser =
            TranscriptParser::with_config(ParserConfig::new().with_skip_system_notices(false))
                .unwrap();
        let transcript = parser.parse_str("[01/01/23, 10:00:00] Alice: image omitted");
        assert_eq!(transcript.len(), 1);
        assert!(!parser.config().skip_system_notices);
    }

    #[test]
    fn test_senders() {
        let transcript = TranscriptParser::new().parse_str(
            "[01/01/23, 10:00:00] Bob: hi\n[01/01/23, 10:01:00] Alice: hey\n[01/01/23, 10:02:00] Bob: ok",
        );
        assert_eq!(transcript.senders(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[01/01/23, 10:00:00] Alice: from disk").unwrap();

        let transcript = TranscriptParser::new().parse(file.path()).unwrap();
        assert_eq!(transcript.records()[0].body, "from disk");
    }

    #[test]
    fn test_parse_file_not_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = TranscriptParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(err, ChatstatError::Utf8 { .. }));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = TranscriptParser::new()
            .parse(Path::new("/nonexistent/chat.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
