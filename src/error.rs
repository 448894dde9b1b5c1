//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum covering every
//! failure a caller can observe, plus [`DropReason`], the per-record outcome
//! used inside the parsing pipeline.
//!
//! # Error Handling Philosophy
//!
//! - **Record-level problems never fail a parse.** A message whose timestamp
//!   cannot be read, or whose body is a system notice, is dropped with a
//!   [`DropReason`] and processing continues with the next message.
//! - **Run-level problems are typed.** Unreadable files, undecodable bytes and
//!   transcripts that yield no usable data surface as [`ChatstatError`]
//!   variants the caller can match on.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the transcript file doesn't exist or an
    /// export path cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 decoding error.
    ///
    /// Transcript bytes must be valid UTF-8; decoding is the caller's
    /// responsibility, so this only appears at the file-loading boundary.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Parsing produced zero clean records.
    ///
    /// The file contained no valid header lines, every timestamp was
    /// unreadable, or every message was a system notice.
    #[error(
        "No usable messages found. Make sure the file is an exported chat \
         transcript with lines like '[01/01/23, 9:05:00 PM] Alice: Hello'"
    )]
    EmptyTranscript,

    /// A sender scope names nobody in the record set.
    #[error("Unknown sender '{sender}'")]
    UnknownSender {
        /// The sender name that was requested
        sender: String,
    },

    /// Invalid date in a date-window filter.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown or unsupported output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A notice phrase or keyword list could not be compiled into a matcher.
    #[error("Invalid notice pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates a UTF-8 error with a description of what was being decoded.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an unknown sender error.
    pub fn unknown_sender(sender: impl Into<String>) -> Self {
        ChatstatError::UnknownSender {
            sender: sender.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if parsing found no usable data.
    pub fn is_empty_transcript(&self) -> bool {
        matches!(self, ChatstatError::EmptyTranscript)
    }

    /// Returns `true` if this is an unknown sender error.
    pub fn is_unknown_sender(&self) -> bool {
        matches!(self, ChatstatError::UnknownSender { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}

/// Why a candidate message did not become a clean record.
///
/// Drops are expected data loss, not failures: they are counted in
/// [`ParseStats`](crate::parser::ParseStats) and logged at `trace` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The timestamp matched neither the 12-hour nor the 24-hour clock.
    UnparseableTimestamp,
    /// The body was empty after stripping direction marks and whitespace.
    EmptyBody,
    /// The body matched a system-notice pattern.
    SystemNotice,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::UnparseableTimestamp => write!(f, "unparseable timestamp"),
            DropReason::EmptyBody => write!(f, "empty body"),
            DropReason::SystemNotice => write!(f, "system notice"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
