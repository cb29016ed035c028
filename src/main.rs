use anyhow::Result;
use clap::Parser;

use std::path::PathBuf;

/// Screen the configured watchlist and print today's streak signals.
#[derive(Debug, Parser)]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "screener.toml")]
    config: PathBuf,

    /// Print the report as JSON instead of the console listing
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    streak_screener::logging::init_logging();
    let args = Args::parse();

    let config = streak_screener::config::ScreenerConfig::load(args.config)?;
    if config.tickers.is_empty() {
        println!("No tickers configured.");
        return Ok(());
    }

    let watchlist = streak_screener::data::load_watchlist(&config.data_dir, &config.tickers)?;
    let outcomes = streak_screener::screener::run_screener(&watchlist, &config.strategy);

    if args.json {
        println!("{}", streak_screener::output::render_json(&outcomes)?);
    } else {
        streak_screener::output::print_report(&outcomes);
    }

    Ok(())
}
