use serde::Deserialize;
use thiserror::Error;

use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file path is not valid UTF-8")]
    FilePathIntoString,
    #[error("failed to initialize settings: {0}")]
    SettingsInit(String),
    #[error("failed to deserialize settings: {0}")]
    Deserialize(String),
}

/// Rule parameters for the streak strategy. Every field can be
/// overridden from the config file; the defaults are the strategy as
/// originally traded.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Trailing window of the long-term moving average (closes).
    pub ma_window: usize,
    /// Down-streak length that opens a long.
    pub long_entry_streak: u32,
    /// Down-streak length that adds to an open long.
    pub long_addon_streak: u32,
    /// Up-streak length (below the moving average) that opens a short.
    pub short_entry_streak: u32,
    /// Up-streak length that closes a long at target.
    pub long_target_up_days: u32,
    /// Down-streak length that closes a short at target.
    pub short_target_down_days: u32,
    /// Excursion below the remembered long entry close that forces an
    /// exit, e.g. -0.10 = down 10%.
    pub long_hard_stop_pct: f64,
    /// Excursion above the remembered short entry close that forces an
    /// exit, e.g. 0.10 = up 10%.
    pub short_hard_stop_pct: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            ma_window: 200,
            long_entry_streak: 3,
            long_addon_streak: 4,
            short_entry_streak: 3,
            long_target_up_days: 5,
            short_target_down_days: 5,
            long_hard_stop_pct: -0.10,
            short_hard_stop_pct: 0.10,
        }
    }
}

/// Telegram delivery settings. Leaving token or chat_id empty disables
/// delivery without failing the run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Watchlist, screened and reported in this order.
    pub tickers: Vec<String>,
    /// Directory holding one `<ticker>.csv` price history per ticker.
    pub data_dir: PathBuf,
    pub strategy: StrategyParams,
    pub telegram: TelegramConfig,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            tickers: vec!["SPY".to_string(), "QQQ".to_string(), "IWM".to_string()],
            data_dir: PathBuf::from("data"),
            strategy: StrategyParams::default(),
            telegram: TelegramConfig::default(),
        }
    }
}

impl ScreenerConfig {
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let filename = path
            .into_os_string()
            .into_string()
            .map_err(|_| ConfigError::FilePathIntoString)?;
        let config = config::Config::builder()
            .add_source(config::File::with_name(&filename))
            .build()
            .map_err(|err| ConfigError::SettingsInit(err.to_string()))?
            .try_deserialize()
            .map_err(|err| ConfigError::Deserialize(err.to_string()))?;
        Ok(config)
    }
}
