//! Result rows of the aggregation engine.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::message::Record;

use super::text::count_links;

/// Message, word and link totals of a scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseMetrics {
    pub messages: usize,
    pub words: usize,
    pub links: usize,
}

impl BaseMetrics {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut acc, record| {
                acc.messages += 1;
                acc.words += record.word_count();
                acc.links += count_links(&record.body);
                acc
            })
    }

    /// Mean words per message, zero for an empty scope.
    pub fn words_per_message(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        self.words as f64 / self.messages as f64
    }
}

/// One row of the active-senders table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub messages: usize,
    /// Share of all messages in the conversation, 0-100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// One row of the longest-messages table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthyMessage {
    /// Present only in the overall scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub words: usize,
}

/// Counts keys and returns the `n` most frequent.
///
/// Ties keep the order in which keys were first seen.
pub(crate) fn rank_by_count<K, I>(items: I, n: usize) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for item in items {
        let next = counts.len();
        counts.entry(item).or_insert((next, 0)).1 += 1;
    }

    let mut ranked: Vec<(K, usize, usize)> = counts
        .into_iter()
        .map(|(key, (first, count))| (key, first, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .take(n)
        .map(|(key, _, count)| (key, count))
        .collect()
}

/// Top senders by message count, with their share of `total`.
pub(crate) fn sender_shares(records: &[&Record], total: usize, n: usize) -> Vec<SenderShare> {
    rank_by_count(records.iter().map(|r| r.sender.as_str()), n)
        .into_iter()
        .map(|(sender, messages)| SenderShare {
            sender: sender.to_string(),
            messages,
            percent: if total == 0 {
                0.0
            } else {
                messages as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// The `n` longest records by word count, earlier records first on ties.
pub(crate) fn lengthy_messages(
    records: &[&Record],
    n: usize,
    with_sender: bool,
) -> Vec<LengthyMessage> {
    let mut by_length: Vec<(usize, &Record)> =
        records.iter().map(|r| (r.word_count(), *r)).collect();
    // stable sort keeps transcript order among equals
    by_length.sort_by(|a, b| b.0.cmp(&a.0));

    by_length
        .into_iter()
        .take(n)
        .map(|(words, record)| LengthyMessage {
            sender: with_sender.then(|| record.sender.clone()),
            timestamp: record.timestamp,
            message: record.body.clone(),
            words,
        })
        .collect()
}
