//! Line classifier: decides whether a transcript line opens a new message.
//!
//! The header grammar is fixed:
//!
//! ```text
//! [DD/MM/YY, H:MM:SS( )?(AM|PM)?] Sender: body
//! ```
//!
//! The gap before the meridiem may be a U+202F narrow no-break space, which
//! newer exports insert. Lines that don't match in full are continuation
//! text; that is the normal outcome, not an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::message::{Meridiem, MessageHeader};

/// Header line pattern.
///
/// Capture groups: 1 date, 2 time, 3 meridiem, 4 sender, 5 body.
pub const HEADER_PATTERN: &str = r"^\[([0-9]{2}/[0-9]{2}/[0-9]{2}),\s*([0-9]{1,2}:[0-9]{2}:[0-9]{2})[\s\x{202F}]*((?i:am|pm))?\s*\]\s+([^:]+):\s*(.*)$";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// Classifies one raw line.
///
/// Returns the header fields if the line starts a new message, or `None` if
/// it is continuation text. Pure; never fails.
///
/// # Example
///
/// ```
/// use chatstat::parsing::classify;
///
/// let header = classify("[01/01/23, 9:05:00 PM] Alice: Hello there").unwrap();
/// assert_eq!(header.sender, "Alice");
/// assert_eq!(header.body_start, "Hello there");
///
/// assert!(classify("How are you?").is_none());
/// ```
pub fn classify(line: &str) -> Option<MessageHeader<'_>> {
    let caps = HEADER_RE.captures(line)?;

    let date = caps.get(1)?.as_str();
    let time = caps.get(2)?.as_str();
    let meridiem = match caps.get(3) {
        Some(m) => Some(Meridiem::from_token(m.as_str())?),
        None => None,
    };
    let sender = caps.get(4)?.as_str().trim();
    let body_start = caps.get(5).map_or("", |m| m.as_str().trim_end());

    if sender.is_empty() {
        return None;
    }

    Some(MessageHeader {
        date,
        time,
        meridiem,
        sender,
        body_start,
    })
}

/// Returns `true` if the line starts a new message.
pub fn is_header(line: &str) -> bool {
    classify(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_12_hour() {
        let header = classify("[01/01/23, 9:05:00 PM] Alice: Hello there").unwrap();
        assert_eq!(header.date, "01/01/23");
        assert_eq!(header.time, "9:05:00");
        assert_eq!(header.meridiem, Some(Meridiem::Pm));
        assert_eq!(header.sender, "Alice");
        assert_eq!(header.body_start, "Hello there");
    }

    #[test]
    fn test_classify_24_hour() {
        let header = classify("[15/06/24, 21:30:15] Bob: Evening").unwrap();
        assert_eq!(header.time, "21:30:15");
        assert_eq!(header.meridiem, None);
        assert_eq!(header.sender, "Bob");
    }

    #[test]
    fn test_classify_narrow_no_break_space() {
        let header = classify("[01/01/23, 11:32:05\u{202F}PM] Alice: Late").unwrap();
        assert_eq!(header.time, "11:32:05");
        assert_eq!(header.meridiem, Some(Meridiem::Pm));
    }

    #[test]
    fn test_classify_lowercase_meridiem() {
        let header = classify("[01/01/23, 7:00:00 am] Alice: Early").unwrap();
        assert_eq!(header.meridiem, Some(Meridiem::Am));
    }

    #[test]
    fn test_classify_meridiem_without_space() {
        let header = classify("[01/01/23, 7:00:00AM] Alice: Early").unwrap();
        assert_eq!(header.meridiem, Some(Meridiem::Am));
    }

    #[test]
    fn test_classify_empty_body() {
        let header = classify("[01/01/23, 10:00:00] Alice:").unwrap();
        assert_eq!(header.body_start, "");
    }

    #[test]
    fn test_classify_body_keeps_later_colons() {
        let header = classify("[01/01/23, 10:00:00] Alice: meet at 10:30: ok?").unwrap();
        assert_eq!(header.sender, "Alice");
        assert_eq!(header.body_start, "meet at 10:30: ok?");
    }

    #[test]
    fn test_classify_trims_sender() {
        let header = classify("[01/01/23, 10:00:00]   Alice Smith  : Hi").unwrap();
        assert_eq!(header.sender, "Alice Smith");
    }

    #[test]
    fn test_classify_blank_sender_is_not_header() {
        assert!(classify("[01/01/23, 10:00:00]    : Hi").is_none());
    }

    #[test]
    fn test_classify_rejects_other_dialects() {
        // US month-first with one-digit fields
        assert!(classify("[1/15/24, 10:30:45 AM] Alice: Hello").is_none());
        // Dotted EU dates
        assert!(classify("[15.01.24, 10:30:45] Alice: Hello").is_none());
        // Unbracketed Android exports
        assert!(classify("15/01/2024, 10:30 - Alice: Hello").is_none());
        // Four-digit year
        assert!(classify("[15/01/2024, 10:30:45] Alice: Hello").is_none());
        // Missing seconds
        assert!(classify("[15/01/24, 10:30] Alice: Hello").is_none());
    }

    #[test]
    fn test_classify_is_anchored() {
        assert!(classify(" [01/01/23, 10:00:00] Alice: Hi").is_none());
        assert!(classify("quote: [01/01/23, 10:00:00] Alice: Hi").is_none());
    }

    #[test]
    fn test_classify_requires_sender_colon() {
        assert!(classify("[01/01/23, 10:00:00] Alice joined").is_none());
    }

    #[test]
    fn test_continuation_lines() {
        assert!(!is_header("How are you?"));
        assert!(!is_header(""));
        assert!(!is_header("   "));
        assert!(!is_header("[not a date] Alice: hi"));
    }
}
