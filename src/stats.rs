use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;
use std::time::Duration;

// Stored counts are never zero.
pub type CountMap<K> = HashMap<K, u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEntry<K> {
    pub key: K,
    pub count: u64,
}

impl<K: fmt::Display> fmt::Display for TopEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.count)
    }
}

#[derive(Debug, Clone)]
pub struct PageResult {
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPage {
    pub url: Option<String>,
    pub length: i64,
}

impl Default for LongestPage {
    fn default() -> Self {
        Self {
            url: None,
            length: -1,
        }
    }
}

impl LongestPage {
    // Ties keep the earlier page.
    pub fn observe(&mut self, url: &str, length: usize) -> bool {
        let length = length as i64;
        if length > self.length {
            self.url = Some(url.to_string());
            self.length = length;
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub global_chars: CountMap<char>,
    pub global_words: CountMap<String>,
    pub longest: LongestPage,
    pub pages_fetched: usize,
    pub pages_skipped: usize,
    pub files_written: Vec<PathBuf>,
    pub elapsed: Duration,
}

fn ranked<K: Ord>(map: &CountMap<K>) -> Vec<(&K, &u64)> {
    let mut entries: Vec<(&K, &u64)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

pub fn sorted_entries<K>(map: &CountMap<K>) -> Vec<TopEntry<K>>
where
    K: Ord + Hash + Clone,
{
    top_k(map, map.len())
}

/// Count descending, then key ascending.
pub fn top_k<K>(map: &CountMap<K>, n: usize) -> Vec<TopEntry<K>>
where
    K: Ord + Hash + Clone,
{
    ranked(map)
        .into_iter()
        .take(n)
        .map(|(key, count)| TopEntry {
            key: key.clone(),
            count: *count,
        })
        .collect()
}
