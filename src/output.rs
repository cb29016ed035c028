use crate::screener::TickerOutcome;

/// Console rendering of a watchlist run. Each action line carries the
/// severity tag of its signal kind so a terminal (or anything scraping
/// the output) can style entries, exits and stops differently.
pub fn print_report(outcomes: &[TickerOutcome]) {
    for outcome in outcomes {
        println!("=== {} ===", outcome.ticker);
        match &outcome.result {
            Ok(record) => {
                println!("Price:          {:.2}", record.price);
                println!("Moving average: {:.2}", record.moving_average);
                println!("Up streak:      {}", record.up_streak);
                println!("Down streak:    {}", record.down_streak);
                if record.actions.is_empty() {
                    println!("NO ACTION REQUIRED");
                } else {
                    for action in &record.actions {
                        println!("[{}] {}", action.kind.severity(), action.message);
                    }
                }
            }
            Err(err) => println!("skipped: {err}"),
        }
        println!();
    }
}

/// JSON rendering of the successful records, for piping into other
/// tooling. Failed instruments are omitted (they are already logged).
pub fn render_json(outcomes: &[TickerOutcome]) -> serde_json::Result<String> {
    let records: Vec<_> = outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .collect();
    serde_json::to_string_pretty(&records)
}
