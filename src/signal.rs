use serde::Serialize;

use crate::config::StrategyParams;

/// Discrete signal categories, listed in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Entry,
    Addon,
    ExitPartial,
    ExitFull,
    StopBreach,
}

impl SignalKind {
    /// Severity bucket the presentation layer renders this kind with.
    pub fn severity(self) -> &'static str {
        match self {
            SignalKind::Entry | SignalKind::Addon => "success",
            SignalKind::ExitPartial => "info",
            SignalKind::ExitFull => "warning",
            SignalKind::StopBreach => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub kind: SignalKind,
    pub message: String,
}

impl Action {
    fn new(kind: SignalKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// One instrument's screening result for the day. Built fresh per
/// evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalRecord {
    pub ticker: String,
    pub price: f64,
    pub moving_average: f64,
    pub up_streak: u32,
    pub down_streak: u32,
    pub actions: Vec<Action>,
}

/// Everything the rule table reads for one instrument on one day.
///
/// The three `*_ref` closes are the prices recorded the last time the
/// matching streak length occurred; None means it never did, which
/// silently disables the corresponding hard-stop rule.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub price: f64,
    /// None when the history is shorter than the moving-average window;
    /// that only suppresses the short-entry rule.
    pub moving_average: Option<f64>,
    pub up_streak: u32,
    pub down_streak: u32,
    pub prev_up_streak: u32,
    pub prev_down_streak: u32,
    pub long_entry_ref: Option<f64>,
    pub long_addon_ref: Option<f64>,
    pub short_entry_ref: Option<f64>,
}

/// Evaluate the full rule table against one snapshot.
///
/// Rules are independent: every matching rule emits, so a single day can
/// produce several actions (a full exit and a hard-stop breach, say).
/// The emission order is fixed (entries/add-ons, partial exits, full
/// exits, hard stops) purely for output stability.
pub fn evaluate_rules(snap: &Snapshot, params: &StrategyParams) -> Vec<Action> {
    let mut actions = Vec::new();
    let price = snap.price;

    // ~~~~ Entries and add-ons ~~~~

    if snap.down_streak == params.long_entry_streak {
        actions.push(Action::new(
            SignalKind::Entry,
            format!(
                "LONG ENTRY: {} straight down days at ${:.2}",
                params.long_entry_streak, price
            ),
        ));
    }

    if snap.down_streak == params.long_addon_streak {
        actions.push(Action::new(
            SignalKind::Addon,
            format!(
                "LONG ADD-ON: {} straight down days at ${:.2}",
                params.long_addon_streak, price
            ),
        ));
    }

    // Short entries need the trend filter; without a moving average the
    // rule stays silent while everything below still runs on raw streaks.
    if let Some(ma) = snap.moving_average {
        if snap.up_streak == params.short_entry_streak && price < ma {
            actions.push(Action::new(
                SignalKind::Entry,
                format!(
                    "SHORT ENTRY: {} straight up days below the {}-day average at ${:.2}",
                    params.short_entry_streak, params.ma_window, price
                ),
            ));
        }
    }

    // ~~~~ Reversal (partial) exits ~~~~

    // The long side reverses off either the entry or the add-on streak;
    // the short side only off the entry streak. Asymmetric on purpose:
    // this mirrors the rule set as originally traded.
    let long_run_just_reversed = snap.up_streak == 1
        && (snap.prev_down_streak == params.long_entry_streak
            || snap.prev_down_streak == params.long_addon_streak);
    if long_run_just_reversed {
        actions.push(Action::new(
            SignalKind::ExitPartial,
            format!(
                "PARTIAL EXIT LONG: first up day after a {}-day slide at ${:.2}",
                snap.prev_down_streak, price
            ),
        ));
    }

    if snap.down_streak == 1 && snap.prev_up_streak == params.short_entry_streak {
        actions.push(Action::new(
            SignalKind::ExitPartial,
            format!(
                "PARTIAL EXIT SHORT: first down day after a {}-day rally at ${:.2}",
                snap.prev_up_streak, price
            ),
        ));
    }

    // ~~~~ Target (full) exits ~~~~

    if snap.up_streak == params.long_target_up_days {
        actions.push(Action::new(
            SignalKind::ExitFull,
            format!(
                "FULL EXIT LONG: {} straight up days at ${:.2}",
                params.long_target_up_days, price
            ),
        ));
    }

    if snap.down_streak == params.short_target_down_days {
        actions.push(Action::new(
            SignalKind::ExitFull,
            format!(
                "FULL EXIT SHORT: {} straight down days at ${:.2}",
                params.short_target_down_days, price
            ),
        ));
    }

    // ~~~~ Hard stops against remembered entry closes ~~~~

    if let Some(reference) = snap.long_entry_ref {
        let excursion = price / reference - 1.0;
        if excursion <= params.long_hard_stop_pct {
            actions.push(Action::new(
                SignalKind::StopBreach,
                format!(
                    "HARD STOP LONG: {:.1}% below the {}-day entry close ${:.2}",
                    excursion * 100.0,
                    params.long_entry_streak,
                    reference
                ),
            ));
        }
    }

    if let Some(reference) = snap.long_addon_ref {
        let excursion = price / reference - 1.0;
        if excursion <= params.long_hard_stop_pct {
            actions.push(Action::new(
                SignalKind::StopBreach,
                format!(
                    "HARD STOP LONG: {:.1}% below the {}-day add-on close ${:.2}",
                    excursion * 100.0,
                    params.long_addon_streak,
                    reference
                ),
            ));
        }
    }

    if let Some(reference) = snap.short_entry_ref {
        let excursion = price / reference - 1.0;
        if excursion >= params.short_hard_stop_pct {
            actions.push(Action::new(
                SignalKind::StopBreach,
                format!(
                    "HARD STOP SHORT: {:.1}% above the {}-day entry close ${:.2}",
                    excursion * 100.0,
                    params.short_entry_streak,
                    reference
                ),
            ));
        }
    }

    actions
}
