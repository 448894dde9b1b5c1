//! Content filter: drops empty bodies and system notices.
//!
//! Bodies are matched case-insensitively against one alternation built from
//! the notice phrases (substring match) and membership keywords (whole-word
//! match). A user who literally types "image omitted" is dropped too; that
//! false positive is accepted.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DEFAULT_NOTICE_KEYWORDS, DEFAULT_NOTICE_PHRASES, ParserConfig};
use crate::error::{DropReason, Result};
use crate::message::Record;

const LEFT_TO_RIGHT_MARK: char = '\u{200E}';
const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

static DEFAULT_FILTER: LazyLock<NoticeFilter> = LazyLock::new(|| {
    NoticeFilter::new(DEFAULT_NOTICE_PHRASES, DEFAULT_NOTICE_KEYWORDS)
        .expect("default notice patterns are valid")
});

/// Compiled system-notice matcher.
///
/// # Example
///
/// ```
/// use chatstat::parsing::NoticeFilter;
///
/// let filter = NoticeFilter::new(&["poll omitted"], &["pinned"]).unwrap();
/// assert!(filter.is_system_notice("POLL OMITTED"));
/// assert!(filter.is_system_notice("Alice pinned a message"));
/// assert!(!filter.is_system_notice("unpinned"));
/// ```
#[derive(Debug, Clone)]
pub struct NoticeFilter {
    pattern: Option<Regex>,
}

impl NoticeFilter {
    /// Builds a filter from substring phrases and whole-word keywords.
    ///
    /// Blank entries are ignored. With nothing left to match, the filter only
    /// drops empty bodies.
    pub fn new<P, K>(phrases: &[P], keywords: &[K]) -> Result<Self>
    where
        P: AsRef<str>,
        K: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .iter()
            .map(|p| p.as_ref().trim())
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        let mut branches = Vec::with_capacity(2);
        if !phrases.is_empty() {
            branches.push(format!("(?:{})", phrases.join("|")));
        }
        if !keywords.is_empty() {
            branches.push(format!(r"\b(?:{})\b", keywords.join("|")));
        }

        let pattern = if branches.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("(?i){}", branches.join("|")))?)
        };

        Ok(Self { pattern })
    }

    /// Builds the filter described by a parser configuration.
    ///
    /// Reuses the precompiled default matcher when the lists are unchanged.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        if !config.skip_system_notices {
            return Ok(Self::disabled());
        }
        if config.uses_default_notices() {
            return Ok(DEFAULT_FILTER.clone());
        }
        Self::new(
            config.notice_phrases.as_slice(),
            config.notice_keywords.as_slice(),
        )
    }

    /// A filter that recognizes no notices and only drops empty bodies.
    pub fn disabled() -> Self {
        Self { pattern: None }
    }

    /// Returns `true` if the body contains a notice phrase or keyword.
    pub fn is_system_notice(&self, body: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(body))
    }

    /// Cleans one record's body, or says why it must be dropped.
    pub fn check(&self, mut record: Record) -> std::result::Result<Record, DropReason> {
        let body = strip_direction_mark(&record.body).trim();
        if body.is_empty() {
            return Err(DropReason::EmptyBody);
        }
        if self.is_system_notice(body) {
            return Err(DropReason::SystemNotice);
        }

        if body.len() != record.body.len() {
            record.body = body.to_string();
        }
        Ok(record)
    }

    /// Keeps the records that pass [`check`](Self::check), in order.
    pub fn clean(&self, records: Vec<Record>) -> Vec<Record> {
        records
            .into_iter()
            .filter_map(|record| self.check(record).ok())
            .collect()
    }
}

impl Default for NoticeFilter {
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

/// Removes one leading left-to-right or right-to-left mark.
pub fn strip_direction_mark(body: &str) -> &str {
    body.strip_prefix(LEFT_TO_RIGHT_MARK)
        .or_else(|| body.strip_prefix(RIGHT_TO_LEFT_MARK))
        .unwrap_or(body)
}

/// Checks a body against the default notice list.
///
/// # Example
///
/// ```
/// use chatstat::parsing::is_system_notice;
///
/// assert!(is_system_notice("Messages and calls are end-to-end encrypted."));
/// assert!(is_system_notice("Bob left"));
/// assert!(!is_system_notice("Leftovers for dinner?"));
/// ```
pub fn is_system_notice(body: &str) -> bool {
    DEFAULT_FILTER.is_system_notice(body)
}

/// Drops empty bodies and default system notices.
pub fn clean(records: Vec<Record>) -> Vec<Record> {
    DEFAULT_FILTER.clean(records)
}
