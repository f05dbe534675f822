use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::stats::CountMap;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Default)]
pub struct PageCounts {
    pub chars: CountMap<char>,
    pub words: CountMap<String>,
}

pub fn count_chars(body: &str) -> CountMap<char> {
    let mut counts = CountMap::new();
    for c in body.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

// Leading and trailing whitespace never produce an empty token.
pub fn count_words(body: &str) -> CountMap<String> {
    let mut counts = CountMap::new();
    for token in WHITESPACE.split(body).filter(|t| !t.is_empty()) {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

pub fn count_page(body: &str) -> PageCounts {
    let (chars, words) = rayon::join(|| count_chars(body), || count_words(body));
    debug!(
        action = "count",
        component = "counter",
        unique_chars = chars.len(),
        unique_words = words.len(),
        "Counted page"
    );
    PageCounts { chars, words }
}

pub fn merge_into<K>(global: &mut CountMap<K>, page: CountMap<K>)
where
    K: Eq + std::hash::Hash,
{
    for (key, count) in page {
        *global.entry(key).or_insert(0) += count;
    }
}
