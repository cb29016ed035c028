use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::StrategyParams;
use crate::data::Sample;
use crate::error::EngineError;
use crate::indicators::{
    Direction, day_directions, last_price_at_streak, latest_pair, simple_moving_average,
    streak_history,
};
use crate::signal::{SignalRecord, Snapshot, evaluate_rules};

/// Per-instrument result of a watchlist run. Failures stay attached to
/// their ticker instead of aborting the run.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerOutcome {
    pub ticker: String,
    pub result: Result<SignalRecord, EngineError>,
}

/// Evaluate one instrument's daily close history against the rule set.
///
/// Pipeline: closes -> day directions -> streak histories -> current and
/// previous streak pairs plus the remembered entry closes -> rule table.
/// Needs at least two closes (for a direction) and a full moving-average
/// window; anything shorter fails for this instrument only.
pub fn evaluate_instrument(
    ticker: &str,
    samples: &[Sample],
    params: &StrategyParams,
) -> Result<SignalRecord, EngineError> {
    let closes: Vec<f64> = samples.iter().map(|s| s.price).collect();

    let directions = day_directions(&closes)?;
    let moving_average = simple_moving_average(&closes, params.ma_window).ok_or(
        EngineError::InsufficientData {
            needed: params.ma_window,
            got: closes.len(),
        },
    )?;

    let up_history = streak_history(&directions, Direction::Up);
    let down_history = streak_history(&directions, Direction::Down);
    let (up_streak, prev_up_streak) = latest_pair(&up_history);
    let (down_streak, prev_down_streak) = latest_pair(&down_history);

    // Streak index i ends on day i + 1, so the closes aligned with the
    // histories start at day 1.
    let streak_closes = &closes[1..];
    let price = *closes.last().expect("closes are non-empty after direction check");

    let snapshot = Snapshot {
        price,
        moving_average: Some(moving_average),
        up_streak,
        down_streak,
        prev_up_streak,
        prev_down_streak,
        long_entry_ref: last_price_at_streak(&down_history, streak_closes, params.long_entry_streak),
        long_addon_ref: last_price_at_streak(&down_history, streak_closes, params.long_addon_streak),
        short_entry_ref: last_price_at_streak(&up_history, streak_closes, params.short_entry_streak),
    };

    let actions = evaluate_rules(&snapshot, params);
    debug!(
        ticker = %ticker,
        up_streak,
        down_streak,
        action_count = actions.len(),
        "evaluated instrument"
    );

    Ok(SignalRecord {
        ticker: ticker.to_string(),
        price,
        moving_average,
        up_streak,
        down_streak,
        actions,
    })
}

/// Screen the whole watchlist. Output order equals input order, and one
/// instrument's failure leaves the rest evaluated; evaluations share no
/// state, so the parallel run is equivalent to a sequential one.
pub fn run_screener(
    watchlist: &[(String, Vec<Sample>)],
    params: &StrategyParams,
) -> Vec<TickerOutcome> {
    watchlist
        .par_iter()
        .map(|(ticker, samples)| {
            let result = evaluate_instrument(ticker, samples, params);
            if let Err(ref err) = result {
                warn!(ticker = %ticker, error = %err, "skipping instrument");
            }
            TickerOutcome {
                ticker: ticker.clone(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalKind;
    use chrono::{Duration, TimeZone, Utc};

    /// One sample per day starting 2025-01-01, one close per price.
    fn daily_series(prices: &[f64]) -> Vec<Sample> {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 21, 0, 0).single().unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| Sample {
                ts: start + Duration::days(i as i64),
                price,
            })
            .collect()
    }

    /// Small window so short synthetic histories still have an average.
    fn test_params() -> StrategyParams {
        StrategyParams {
            ma_window: 2,
            ..StrategyParams::default()
        }
    }

    #[test]
    fn test_single_close_fails_with_insufficient_data_not_an_empty_record() {
        let samples = daily_series(&[100.0]);
        let err = evaluate_instrument("X", &samples, &test_params()).unwrap_err();
        assert_eq!(err, EngineError::InsufficientData { needed: 2, got: 1 });
    }

    #[test]
    fn test_history_shorter_than_ma_window_fails_for_that_instrument() {
        let params = StrategyParams {
            ma_window: 10,
            ..StrategyParams::default()
        };
        let samples = daily_series(&[100.0, 99.0, 98.0]);
        let err = evaluate_instrument("X", &samples, &params).unwrap_err();
        assert_eq!(err, EngineError::InsufficientData { needed: 10, got: 3 });
    }

    #[test]
    fn test_three_straight_down_days_emit_a_long_entry_at_the_last_close() {
        // 100 -> 99 -> 98 -> 97: three down days, entry streak 3.
        let samples = daily_series(&[100.0, 99.0, 98.0, 97.0]);
        let record = evaluate_instrument("SPY", &samples, &test_params()).unwrap();

        assert_eq!(record.down_streak, 3);
        assert_eq!(record.actions.len(), 1);
        assert_eq!(record.actions[0].kind, SignalKind::Entry);
        assert!(record.actions[0].message.contains("97.00"));
        assert!((record.price - 97.0).abs() < 1e-12);
    }

    #[test]
    fn test_hard_stop_references_the_close_of_the_last_three_day_slide() {
        // The down-streak hits 3 at close 100, the slide reverses, and
        // the instrument later trades at 89: an 11% excursion below the
        // remembered entry close, through the -10% stop.
        //
        // closes:       104 103 102 100 101 89
        // down history:   -   1   2   3   0  1
        let samples = daily_series(&[104.0, 103.0, 102.0, 100.0, 101.0, 89.0]);
        let record = evaluate_instrument("SPY", &samples, &test_params()).unwrap();

        assert_eq!(record.actions.len(), 1);
        assert_eq!(record.actions[0].kind, SignalKind::StopBreach);
        assert!(record.actions[0].message.contains("100.00"));
    }

    #[test]
    fn test_first_up_day_after_three_down_days_is_a_partial_exit_and_no_entry() {
        // closes:       103 102 101 100 101
        // down history:   -   1   2   3   0
        // up history:     -   0   0   0   1
        let samples = daily_series(&[103.0, 102.0, 101.0, 100.0, 101.0]);
        let record = evaluate_instrument("SPY", &samples, &test_params()).unwrap();

        assert_eq!(record.up_streak, 1);
        assert_eq!(record.actions.len(), 1);
        assert_eq!(record.actions[0].kind, SignalKind::ExitPartial);
    }

    #[test]
    fn test_full_exit_and_stop_breach_can_fire_on_the_same_day() {
        // Five straight down days with the short-side target at 5: the
        // down-streak passed 3 at close 100 (the stop reference) and the
        // last close 88 is 12% under it, so both the full exit and the
        // long hard stop fire in one record, in the fixed order.
        //
        // closes:       110 109 108 100 95 88
        // down history:   -   1   2   3  4  5
        let samples = daily_series(&[110.0, 109.0, 108.0, 100.0, 95.0, 88.0]);
        let record = evaluate_instrument("SPY", &samples, &test_params()).unwrap();

        let kinds: Vec<SignalKind> = record.actions.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![SignalKind::ExitFull, SignalKind::StopBreach]);
        // The 4-day add-on close (95) is only 7.4% above 88, so just the
        // 3-day entry stop appears.
        assert!(record.actions[1].message.contains("100.00"));
    }

    #[test]
    fn test_flat_day_resets_both_streaks() {
        // closes: 100 99 99 99 -> one down day, then two flat days.
        let samples = daily_series(&[100.0, 99.0, 99.0, 99.0]);
        let record = evaluate_instrument("SPY", &samples, &test_params()).unwrap();

        assert_eq!(record.up_streak, 0);
        assert_eq!(record.down_streak, 0);
        assert!(record.actions.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let samples = daily_series(&[104.0, 103.0, 102.0, 100.0, 101.0, 89.0]);
        let params = test_params();
        let first = evaluate_instrument("SPY", &samples, &params).unwrap();
        let second = evaluate_instrument("SPY", &samples, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_failing_instrument_does_not_stop_the_watchlist() {
        let watchlist = vec![
            ("GOOD".to_string(), daily_series(&[100.0, 99.0, 98.0, 97.0])),
            ("SHORT".to_string(), daily_series(&[100.0])),
            ("ALSO_GOOD".to_string(), daily_series(&[100.0, 101.0])),
        ];
        let outcomes = run_screener(&watchlist, &test_params());

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
    }

    #[test]
    fn test_run_screener_preserves_watchlist_order() {
        let watchlist: Vec<(String, Vec<Sample>)> = ["C", "A", "B"]
            .iter()
            .map(|t| (t.to_string(), daily_series(&[100.0, 101.0, 102.0])))
            .collect();
        let outcomes = run_screener(&watchlist, &test_params());

        let order: Vec<&str> = outcomes.iter().map(|o| o.ticker.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }
}
