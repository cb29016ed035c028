//! Streak screener: daily close-price histories in, discrete trading
//! signals out, based on consecutive-day direction streaks and a
//! long-term moving average filter.

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod notify;
pub mod output;
pub mod screener;
pub mod signal;
