pub mod args;
pub mod counter;
pub mod fetch;
pub mod output;
pub mod pages;
pub mod report;
pub mod run;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use counter::{count_chars, count_page, count_words, merge_into, PageCounts};
pub use fetch::{FetchError, HttpFetcher, PageSource};
pub use output::{write_count_file, WriteError};
pub use run::{run, Pause, RunConfig, ThreadSleep};
pub use stats::{sorted_entries, top_k, CountMap, LongestPage, PageResult, RunSummary, TopEntry};
