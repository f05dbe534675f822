use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::counter::{count_page, merge_into};
use crate::fetch::PageSource;
use crate::output::{write_count_file, CHARS_FILE, WORDS_FILE};
use crate::report;
use crate::stats::{CountMap, LongestPage, PageResult, RunSummary};

pub trait Pause {
    fn pause(&mut self, delay: Duration);
}

#[derive(Debug, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub top: usize,
    pub delay: Duration,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            top: 5,
            delay: Duration::from_millis(500),
            output_dir: PathBuf::from("."),
        }
    }
}

pub fn fetch_page<S: PageSource + ?Sized>(source: &S, url: &str) -> PageResult {
    let body = match source.fetch(url) {
        Ok(body) => Some(body),
        Err(e) => {
            error!(action = "fetch", component = "run", url = url, error = %e, "Skipping page");
            None
        }
    };
    PageResult {
        url: url.to_string(),
        body,
    }
}

// A failed fetch or file write is logged and never aborts the run.
pub fn run<S, P, W>(
    urls: &[String],
    source: &S,
    pause: &mut P,
    out: &mut W,
    config: &RunConfig,
) -> Result<RunSummary>
where
    S: PageSource + ?Sized,
    P: Pause + ?Sized,
    W: Write,
{
    let start_time = Instant::now();
    info!(action = "start", component = "run", url_count = urls.len(), "Starting run");

    let mut global_chars: CountMap<char> = CountMap::new();
    let mut global_words: CountMap<String> = CountMap::new();
    let mut longest = LongestPage::default();
    let mut pages_fetched = 0;
    let mut pages_skipped = 0;

    for url in urls {
        let page = fetch_page(source, url);
        let Some(body) = page.body else {
            pages_skipped += 1;
            continue;
        };
        pages_fetched += 1;

        report::print_running(out, &page.url).context("Failed to write progress")?;

        let counts = count_page(&body);
        report::print_page_summary(out, &counts, config.top)
            .context("Failed to write page summary")?;

        if longest.observe(&page.url, body.chars().count()) {
            info!(
                action = "update",
                component = "longest_page",
                url = %page.url,
                length = longest.length,
                "New longest page"
            );
        }

        merge_into(&mut global_chars, counts.chars);
        merge_into(&mut global_words, counts.words);

        pause.pause(config.delay);
    }

    report::print_longest_page(out, &longest).context("Failed to write longest page")?;
    report::print_global_summary(out, &global_chars, &global_words, config.top)
        .context("Failed to write global summary")?;

    let mut files_written = Vec::new();
    let chars_path = config.output_dir.join(CHARS_FILE);
    match write_count_file(&chars_path, &global_chars) {
        Ok(()) => files_written.push(chars_path),
        Err(e) => {
            error!(action = "write", component = "run", error = %e, "Failed to write counts file")
        }
    }
    let words_path = config.output_dir.join(WORDS_FILE);
    match write_count_file(&words_path, &global_words) {
        Ok(()) => files_written.push(words_path),
        Err(e) => {
            error!(action = "write", component = "run", error = %e, "Failed to write counts file")
        }
    }

    let elapsed = start_time.elapsed();
    report::print_elapsed(out, elapsed).context("Failed to write elapsed time")?;
    info!(
        action = "complete",
        component = "run",
        pages_fetched,
        pages_skipped,
        duration_ms = elapsed.as_millis(),
        "Run completed"
    );

    Ok(RunSummary {
        global_chars,
        global_words,
        longest,
        pages_fetched,
        pages_skipped,
        files_written,
        elapsed,
    })
}
