//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - system-notice filtering rules for the parser
//! - [`AnalysisConfig`] - table sizes and stop words for the aggregation engine
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_notice_phrase("poll omitted");
//! let analysis = AnalysisConfig::new()
//!     .with_top_words(20)
//!     .with_stop_word("lol");
//! ```

use serde::{Deserialize, Serialize};

/// Phrases whose presence anywhere in a body marks it as a system notice.
///
/// Matched case-insensitively as substrings.
pub const DEFAULT_NOTICE_PHRASES: &[&str] = &[
    "Messages and calls are end-to-end encrypted.",
    "image omitted",
    "document omitted",
    "sticker omitted",
    "This message was deleted.",
    "deleted this message",
    "GIF omitted",
    "audio omitted",
    "video omitted",
    "You joined using this group's invite link",
    "You joined using this group\u{2019}s invite link",
    "changed the group name",
    "changed this group's icon",
    "changed this group\u{2019}s icon",
    "changed the group settings",
    "created this group",
];

/// Membership-event keywords, matched case-insensitively as whole words.
pub const DEFAULT_NOTICE_KEYWORDS: &[&str] = &["left", "added", "removed", "joined"];

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// // Keep every message, including encryption banners and media placeholders
/// let config = ParserConfig::new().with_skip_system_notices(false);
/// assert!(!config.skip_system_notices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop messages that match a system-notice pattern (default: true)
    pub skip_system_notices: bool,

    /// Substring phrases identifying system notices
    pub notice_phrases: Vec<String>,

    /// Whole-word keywords identifying membership events
    pub notice_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_system_notices: true,
            notice_phrases: DEFAULT_NOTICE_PHRASES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            notice_keywords: DEFAULT_NOTICE_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to drop system notices.
    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }

    /// Adds a substring phrase to the notice list.
    #[must_use]
    pub fn with_notice_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.notice_phrases.push(phrase.into());
        self
    }

    /// Adds a whole-word keyword to the notice list.
    #[must_use]
    pub fn with_notice_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.notice_keywords.push(keyword.into());
        self
    }

    /// Returns `true` if the notice lists are the built-in defaults.
    pub fn uses_default_notices(&self) -> bool {
        self.notice_phrases.iter().map(String::as_str).eq(DEFAULT_NOTICE_PHRASES.iter().copied())
            && self
                .notice_keywords
                .iter()
                .map(String::as_str)
                .eq(DEFAULT_NOTICE_KEYWORDS.iter().copied())
    }
}

/// Configuration for the aggregation engine.
///
/// Controls how many rows each top-N table returns and which extra words are
/// ignored by the word-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rows in the emoji table (default: 5)
    pub top_emojis: usize,

    /// Rows in the word-frequency table (default: 10)
    pub top_words: usize,

    /// Rows in the longest-messages table (default: 3)
    pub top_messages: usize,

    /// Rows in the active-senders table (default: 5)
    pub active_senders: usize,

    /// Stop words in addition to the built-in list
    pub extra_stop_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_emojis: 5,
            top_words: 10,
            top_messages: 3,
            active_senders: 5,
            extra_stop_words: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of emojis reported.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the number of words reported.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of longest messages reported.
    #[must_use]
    pub fn with_top_messages(mut self, n: usize) -> Self {
        self.top_messages = n;
        self
    }

    /// Sets the number of senders in the active-senders table.
    #[must_use]
    pub fn with_active_senders(mut self, n: usize) -> Self {
        self.active_senders = n;
        self
    }

    /// Adds a word to ignore in the word-frequency table.
    ///
    /// Stop words are compared against lower-cased tokens.
    #[must_use]
    pub fn with_stop_word(mut self, word: impl Into<String>) -> Self {
        self.extra_stop_words.push(word.into().to_lowercase());
        self
    }
}
