use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use std::path::PathBuf;

use streak_screener::notify::TelegramNotifier;

/// Screen the configured watchlist and deliver the summary to Telegram.
///
/// Delivery is fire-and-forget: a failed send is logged and the run
/// still exits successfully, since the evaluation itself completed.
#[derive(Debug, Parser)]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "screener.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    streak_screener::logging::init_logging();
    let args = Args::parse();

    let config = streak_screener::config::ScreenerConfig::load(args.config)?;
    let watchlist = streak_screener::data::load_watchlist(&config.data_dir, &config.tickers)?;
    let outcomes = streak_screener::screener::run_screener(&watchlist, &config.strategy);

    let summary = streak_screener::notify::build_summary(&outcomes);
    match TelegramNotifier::from_config(&config.telegram) {
        Some(notifier) => match notifier.send_message(&summary) {
            Ok(()) => info!("Telegram summary delivered"),
            Err(err) => error!(error = %err, "failed to deliver Telegram summary"),
        },
        // Without credentials the summary still goes somewhere useful.
        None => println!("{summary}"),
    }

    Ok(())
}
