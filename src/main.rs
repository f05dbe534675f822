use anyhow::Result;
use clap::Parser;
use std::io;
use std::time::Duration;
use tracing::{error, info};

use pagefreq::{pages, run, utils, Args, HttpFetcher, RunConfig, ThreadSleep};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose)?;
    utils::validate_args(&args)?;

    let urls = pages::default_urls();

    if args.list_urls {
        for url in &urls {
            println!("{}", url);
        }
        return Ok(());
    }

    let config = RunConfig {
        top: args.top,
        delay: Duration::from_millis(args.delay_ms),
        ..RunConfig::default()
    };

    let fetcher = HttpFetcher::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&urls, &fetcher, &mut ThreadSleep, &mut out, &config) {
        Ok(summary) => {
            info!(
                pages_fetched = summary.pages_fetched,
                pages_skipped = summary.pages_skipped,
                files_written = summary.files_written.len(),
                "Done"
            );
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
