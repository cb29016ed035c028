use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct PriceRow {
    pub timestamp: String,
    pub price: f64,
}

/// One close-price observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub ts: DateTime<Utc>,
    pub price: f64,
}

pub fn get_samples_from_input_file(input: &Path) -> Result<Vec<Sample>> {
    let file =
        File::open(input).with_context(|| format!("failed to open input file: {:?}", input))?;

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut samples: Vec<Sample> = Vec::new();

    for result in rdr.deserialize::<PriceRow>() {
        let row: PriceRow = result.with_context(|| "failed to deserialize CSV row")?;
        let ts = DateTime::parse_from_rfc3339(&row.timestamp)
            .with_context(|| format!("failed to parse timestamp: {}", row.timestamp))?
            .with_timezone(&Utc);
        samples.push(Sample {
            ts,
            price: row.price,
        });
    }
    Ok(samples)
}

/// Collapse raw samples (possibly intraday ticks) into one close per
/// UTC calendar day.
///
/// Samples arrive in chronological order, so a later tick for the same
/// day replaces the earlier one and the survivor is that day's close.
pub fn resample_to_daily(samples: &[Sample]) -> Vec<Sample> {
    let mut buckets: BTreeMap<NaiveDate, Sample> = BTreeMap::new();

    for s in samples {
        buckets.insert(
            s.ts.date_naive(),
            Sample {
                ts: s.ts,
                price: s.price,
            },
        );
    }

    buckets.into_values().collect()
}

/// Load the daily close history for every configured ticker from
/// `<data_dir>/<ticker>.csv`, keeping the configured order.
pub fn load_watchlist(data_dir: &Path, tickers: &[String]) -> Result<Vec<(String, Vec<Sample>)>> {
    let mut watchlist = Vec::with_capacity(tickers.len());

    for ticker in tickers {
        let path = data_dir.join(format!("{ticker}.csv"));
        let samples = get_samples_from_input_file(&path)
            .with_context(|| format!("failed to load price history for {ticker}"))?;
        let daily = resample_to_daily(&samples);
        debug!(
            ticker = %ticker,
            raw = samples.len(),
            daily = daily.len(),
            "loaded price history"
        );
        watchlist.push((ticker.clone(), daily));
    }

    Ok(watchlist)
}
