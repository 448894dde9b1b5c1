//! # chatstat
//!
//! Parse exported chat transcripts in the bracketed WhatsApp text layout and
//! compute conversation statistics, overall or per sender.
//!
//! ## Overview
//!
//! A transcript looks like this:
//!
//! ```text
//! [01/01/23, 9:05:00 PM] Alice: Hello there
//! How are you?
//! [01/01/23, 21:06:00] Bob: Fine 🙂 https://example.com
//! ```
//!
//! Parsing runs four stages, each usable on its own from [`parsing`]:
//!
//! 1. **classify** every line as a message header or a continuation
//! 2. **assemble** multi-line messages
//! 3. **normalize** timestamps (12-hour and 24-hour clocks) into calendar fields
//! 4. **clean** bodies and drop system notices such as media placeholders
//!
//! The [`analysis`] module then aggregates the clean records into totals,
//! active senders, emoji and word rankings, activity timelines and the longest
//! messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let transcript = TranscriptParser::new().parse_str("\
//! [01/01/23, 9:05:00 PM] Alice: pizza tonight? 🍕
//! [01/01/23, 9:06:00 PM] Bob: image omitted
//! [01/01/23, 9:07:00 PM] Bob: pizza, yes 🍕
//! ");
//! let records = transcript.ensure_usable()?.into_records();
//!
//! let report = Analyzer::try_new(&records, Scope::sender("Bob"))?
//!     .report(&AnalysisConfig::default());
//! assert_eq!(report.metrics.messages, 1);
//! assert_eq!(report.top_words[0].word, "pizza");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the whole pipeline in one call
//! - [`parsing`] - the individual pipeline stages
//! - [`analysis`] - [`Analyzer`](analysis::Analyzer), [`Scope`](analysis::Scope), [`Report`](analysis::Report)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - date-window filtering and record export (CSV, JSON, JSONL)
//! - [`format`] - [`ExportFormat`](format::ExportFormat)
//! - [`message`] - [`Record`] and the intermediate message types
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{ChatstatError, Result};
pub use message::Record;
pub use parser::parse_transcript;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;
    pub use crate::error::{ChatstatError, DropReason, Result};

    pub use crate::parser::{ParseStats, Transcript, TranscriptParser, parse_transcript};

    pub use crate::config::{AnalysisConfig, ParserConfig};

    pub use crate::analysis::{Analyzer, Report, Scope};

    pub use crate::core::filter::{FilterConfig, apply_filters};

    pub use crate::format::{ExportFormat, to_format_string, write_to_format};
}
