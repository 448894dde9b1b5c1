//! Token extraction over message bodies: links, emojis, words.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// English stop words plus common transliterated chat filler.
///
/// Entries are lower case. Tokens shorter than two characters are dropped
/// separately, so single letters need not be listed.
pub const STOP_WORDS: &[&str] = &[
    // English
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "com", "could", "did", "do", "does", "doing", "down",
    "during", "each", "else", "ever", "few", "for", "from", "further", "get", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "however", "http", "https", "if", "in", "into", "is", "it", "its", "itself", "just",
    "like", "me", "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "shall", "she", "should", "since", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "www", "you", "your", "yours", "yourself", "yourselves",
    // Chat filler and transliterated Hindi
    "aap", "apne", "apni", "ask", "aur", "bhai", "bhi", "call", "deleted", "guys", "hai",
    "hum", "jo", "kar", "karke", "kiya", "kon", "kya", "liye", "ko", "mam", "may", "media",
    "message", "messages", "msg", "must", "nahi", "omitted", "one", "par", "pe", "per",
    "please", "plz", "pm", "sath", "sir", "whatsapp", "woh", "yeh",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("link pattern is valid"));

// Emoji code points outside ASCII; keycap bases like '#' and '0' are excluded.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Emoji}&&[^\x00-\x7F]]").expect("emoji pattern is valid")
});

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Counts `http(s)://` and `www.` links in a body.
///
/// ```
/// use chatstat::analysis::text::count_links;
///
/// assert_eq!(count_links("Check https://example.com and www.test.org"), 2);
/// ```
pub fn count_links(body: &str) -> usize {
    LINK_RE.find_iter(body).count()
}

/// Yields every emoji code point in a body, in order.
pub fn emojis(body: &str) -> impl Iterator<Item = &str> {
    EMOJI_RE.find_iter(body).map(|m| m.as_str())
}

/// Returns `true` if the lower-cased token is a built-in stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

/// Lower-cased word tokens that survive the length and stop-word checks.
///
/// `extra` holds caller-supplied stop words, already lower case.
pub fn content_words(body: &str, extra: &HashSet<String>) -> Vec<String> {
    let lowered = body.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() > 1 && !is_stop_word(word) && !extra.contains(*word))
        .map(str::to_string)
        .collect()
}
