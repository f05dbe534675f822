use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pagefreq",
    about = "Fetch a fixed set of web pages and report their character and word frequencies",
    version,
    long_about = None
)]
pub struct Args {
    /// Number of entries shown in each "most used" list
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,

    /// Pause between pages, in milliseconds
    #[arg(short, long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the embedded URL list and exit
    #[arg(long)]
    pub list_urls: bool,
}
