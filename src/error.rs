use thiserror::Error;

/// Errors produced while evaluating a single instrument.
///
/// Every variant is scoped to the instrument being evaluated; one
/// instrument failing never aborts the rest of the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("not enough history: need at least {needed} closes, got {got}")]
    InsufficientData { needed: usize, got: usize },
}
