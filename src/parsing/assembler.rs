//! Message assembler: merges continuation lines into their messages.
//!
//! The assembler keeps at most one open message. A header line closes the
//! open message (emitting it) and opens a new one; any other line is appended
//! to the open message, or discarded if no message has been opened yet
//! (export preamble). Whatever is open at end of input is emitted by
//! [`Assembler::finish`].
//!
//! No timestamp or content validation happens here.

use crate::message::RawMessage;

use super::classifier::classify;

/// Incremental line-by-line message assembler.
///
/// # Example
///
/// ```
/// use chatstat::parsing::Assembler;
///
/// let mut assembler = Assembler::new();
/// assert!(assembler.push("[01/01/23, 9:05:00 PM] Alice: Hello there").is_none());
/// assert!(assembler.push("How are you?").is_none());
///
/// let message = assembler.finish().unwrap();
/// assert_eq!(message.body, "Hello there\nHow are you?");
/// ```
#[derive(Debug, Default)]
pub struct Assembler {
    open: Option<RawMessage>,
    header_lines: usize,
    skipped_lines: usize,
}

impl Assembler {
    /// Creates an assembler with no open message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line. Returns the previously open message if this line
    /// closed it.
    pub fn push(&mut self, line: &str) -> Option<RawMessage> {
        match classify(line) {
            Some(header) => {
                self.header_lines += 1;
                self.open.replace(RawMessage::from_header(&header))
            }
            None => {
                match self.open.as_mut() {
                    Some(open) => open.push_line(line),
                    None => self.skipped_lines += 1,
                }
                None
            }
        }
    }

    /// Ends input, returning the open message if there is one.
    pub fn finish(self) -> Option<RawMessage> {
        self.open
    }

    /// Number of header lines seen so far.
    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    /// Number of lines discarded because they preceded the first header.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

/// Assembles a full line sequence into raw messages, in input order.
///
/// Emits exactly one message per header line.
pub fn assemble<'a, I>(lines: I) -> Vec<RawMessage>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assembler = Assembler::new();
    let mut messages: Vec<RawMessage> = lines
        .into_iter()
        .filter_map(|line| assembler.push(line))
        .collect();
    messages.extend(assembler.finish());
    messages
}
