use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::config::TelegramConfig;
use crate::screener::TickerOutcome;

const NO_SIGNAL_TEXT: &str = "Strategy scan complete: no signals triggered.";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Telegram API returned an error: {0}")]
    Api(String),
}

/// The JSON payload for the Telegram `sendMessage` endpoint.
#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// A client for sending the daily summary to a Telegram chat.
pub struct TelegramNotifier {
    client: Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Returns `None` if the token or chat_id is missing from the
    /// configuration, allowing the run to proceed without delivery.
    pub fn from_config(config: &TelegramConfig) -> Option<Self> {
        if config.token.is_empty() || config.chat_id.is_empty() {
            warn!("Telegram notifier is not configured (missing token or chat_id)");
            return None;
        }
        Some(Self {
            client: Client::new(),
            token: config.token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Send a text message to the configured chat. One shot, no retry:
    /// callers log a failure and move on.
    pub fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);

        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
        };

        let response = self.client.post(&url).json(&payload).send()?;

        if !response.status().is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "failed to decode error response".to_string());
            return Err(NotifyError::Api(body));
        }

        Ok(())
    }
}

/// One text block with every instrument that produced at least one
/// action; the fixed no-signal line when nothing fired anywhere.
pub fn build_summary(outcomes: &[TickerOutcome]) -> String {
    let mut text = String::from("Daily strategy alert:\n");
    let mut has_signal = false;

    for outcome in outcomes {
        let Ok(record) = &outcome.result else { continue };
        if record.actions.is_empty() {
            continue;
        }
        has_signal = true;
        text.push_str(&format!("\n[{}] ${:.2}\n", record.ticker, record.price));
        for action in &record.actions {
            text.push_str(&format!("- {}\n", action.message));
        }
    }

    if !has_signal {
        return NO_SIGNAL_TEXT.to_string();
    }
    text
}
