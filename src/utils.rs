use anyhow::Result;
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// stdout carries only the report.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "pagefreq=debug,info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(timer)
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

pub fn validate_args(args: &crate::args::Args) -> Result<()> {
    if args.top == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    Ok(())
}
