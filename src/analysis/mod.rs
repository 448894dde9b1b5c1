//! Aggregation engine: statistics over clean records.
//!
//! Every table is computed for a [`Scope`]: the whole conversation, or the
//! messages of one sender. Records are never mutated; scoping only selects
//! which ones are read.
//!
//! | Table | Method | Notes |
//! |-------|--------|-------|
//! | Totals | [`Analyzer::base_metrics`] | messages, words, links |
//! | Active senders | [`Analyzer::active_senders`] | overall scope only |
//! | Emojis | [`Analyzer::top_emojis`] | per code point |
//! | Words | [`Analyzer::word_frequency`] | lower-cased, stop words removed |
//! | Timeline | [`Analyzer::timeline`] | hour, weekday, month |
//! | Longest messages | [`Analyzer::top_lengthy_messages`] | by word count |
//!
//! # Example
//!
//! ```rust
//! use chatstat::analysis::{Analyzer, Scope};
//! use chatstat::parse_transcript;
//!
//! let records = parse_transcript("\
//! [01/01/23, 9:05:00 PM] Alice: pizza tonight? 🍕
//! [01/01/23, 9:06:00 PM] Bob: pizza sounds great 🍕🍕
//! [01/01/23, 9:07:00 PM] Alice: https://example.com/menu
//! ");
//!
//! let overall = Analyzer::overall(&records);
//! assert_eq!(overall.base_metrics().links, 1);
//! assert_eq!(overall.top_emojis(5)[0].count, 3);
//! assert_eq!(overall.word_frequency(1)[0].word, "pizza");
//!
//! let bob = Analyzer::try_new(&records, Scope::sender("Bob")).unwrap();
//! assert_eq!(bob.base_metrics().messages, 1);
//! assert!(bob.active_senders(5).is_empty());
//! ```

pub mod metrics;
pub mod text;
pub mod timeline;

use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::config::AnalysisConfig;
use crate::error::{ChatstatError, Result};
use crate::message::Record;

pub use metrics::{BaseMetrics, EmojiCount, LengthyMessage, SenderShare, WordCount};
pub use timeline::{HourBucket, MonthBucket, Timeline, WeekdayBucket};

use metrics::{lengthy_messages, rank_by_count, sender_shares};

const OVERALL: &str = "Overall";

/// Which messages an analysis looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The whole conversation.
    #[default]
    Overall,
    /// Messages of one sender.
    Sender(String),
}

impl Scope {
    pub fn sender(name: impl Into<String>) -> Self {
        Scope::Sender(name.into())
    }

    /// Reads a scope selector: `"Overall"` in any case (or nothing) means the
    /// whole conversation, anything else is a sender name.
    ///
    /// ```rust
    /// use chatstat::analysis::Scope;
    ///
    /// assert_eq!(Scope::parse("overall"), Scope::Overall);
    /// assert_eq!(Scope::parse(" Alice "), Scope::sender("Alice"));
    /// ```
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.is_empty() || selector.eq_ignore_ascii_case(OVERALL) {
            Scope::Overall
        } else {
            Scope::Sender(selector.to_string())
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }

    /// `Overall` followed by every sender, sorted.
    pub fn options(records: &[Record]) -> Vec<Scope> {
        std::iter::once(Scope::Overall)
            .chain(senders(records).into_iter().map(Scope::sender))
            .collect()
    }

    fn includes(&self, record: &Record) -> bool {
        match self {
            Scope::Overall => true,
            Scope::Sender(name) => record.sender == *name,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Overall => f.write_str(OVERALL),
            Scope::Sender(name) => f.write_str(name),
        }
    }
}

impl FromStr for Scope {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Scope::parse(s))
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sorted distinct sender names.
pub fn senders(records: &[Record]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Computes statistics for one scope of a record set.
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    scope: Scope,
    total: usize,
    records: Vec<&'a Record>,
    extra_stop_words: HashSet<String>,
}

impl<'a> Analyzer<'a> {
    /// Selects the records in `scope`.
    ///
    /// An unknown sender yields an empty selection; use
    /// [`try_new`](Self::try_new) to reject it instead.
    pub fn new(records: &'a [Record], scope: Scope) -> Self {
        let selected = records.iter().filter(|r| scope.includes(r)).collect();
        Self {
            scope,
            total: records.len(),
            records: selected,
            extra_stop_words: HashSet::new(),
        }
    }

    /// Like [`new`](Self::new), but fails if a sender scope matches nothing.
    pub fn try_new(records: &'a [Record], scope: Scope) -> Result<Self> {
        let analyzer = Self::new(records, scope);
        if let Scope::Sender(name) = &analyzer.scope {
            if analyzer.records.is_empty() {
                return Err(ChatstatError::unknown_sender(name.clone()));
            }
        }
        Ok(analyzer)
    }

    pub fn overall(records: &'a [Record]) -> Self {
        Self::new(records, Scope::Overall)
    }

    /// Adds words to ignore in [`word_frequency`](Self::word_frequency).
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Records in scope, in transcript order.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn base_metrics(&self) -> BaseMetrics {
        BaseMetrics::from_records(self.records.iter().copied())
    }

    /// Top `n` senders with their share of all messages.
    ///
    /// Empty unless the scope is [`Scope::Overall`].
    pub fn active_senders(&self, n: usize) -> Vec<SenderShare> {
        if !self.scope.is_overall() {
            return Vec::new();
        }
        sender_shares(&self.records, self.total, n)
    }

    pub fn top_emojis(&self, n: usize) -> Vec<EmojiCount> {
        let emojis = self.records.iter().flat_map(|r| text::emojis(&r.body));
        rank_by_count(emojis, n)
            .into_iter()
            .map(|(emoji, count)| EmojiCount {
                emoji: emoji.to_string(),
                count,
            })
            .collect()
    }

    pub fn word_frequency(&self, n: usize) -> Vec<WordCount> {
        let words = self
            .records
            .iter()
            .flat_map(|r| text::content_words(&r.body, &self.extra_stop_words));
        rank_by_count(words, n)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    pub fn timeline(&self) -> Timeline {
        Timeline::from_records(self.records.iter().copied())
    }

    /// The `n` longest messages by word count.
    ///
    /// Rows carry the sender only in the overall scope.
    pub fn top_lengthy_messages(&self, n: usize) -> Vec<LengthyMessage> {
        lengthy_messages(&self.records, n, self.scope.is_overall())
    }

    /// Computes every table with the sizes in `config`.
    pub fn report(&self, config: &AnalysisConfig) -> Report {
        let analyzer = self
            .clone()
            .with_stop_words(config.extra_stop_words.iter());

        Report {
            scope: self.scope.clone(),
            metrics: analyzer.base_metrics(),
            active_senders: analyzer.active_senders(config.active_senders),
            top_emojis: analyzer.top_emojis(config.top_emojis),
            top_words: analyzer.word_frequency(config.top_words),
            timeline: analyzer.timeline(),
            longest_messages: analyzer.top_lengthy_messages(config.top_messages),
        }
    }
}

/// Every aggregation table for one scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub scope: Scope,
    pub metrics: BaseMetrics,
    pub active_senders: Vec<SenderShare>,
    pub top_emojis: Vec<EmojiCount>,
    pub top_words: Vec<WordCount>,
    pub timeline: Timeline,
    pub longest_messages: Vec<LengthyMessage>,
}

impl Report {
    /// Pretty-printed JSON.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
