//! homework-bot: relays homework review status changes to a Telegram chat.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ raw JSON ┌──────────┐ message ┌────────────┐
//! │  source/  │ ───────► │ poll.rs  │ ──────► │  notify/   │ ──► chat
//! │ (API GET) │          │ (cycle)  │         │ (Bot API)  │
//! └───────────┘          └──────────┘         └────────────┘
//!                          │     ▲
//!              validate +  ▼     │ cursor, last message
//!               format  message.rs / app.rs
//! ```
//!
//! * **`source/`**: the `HomeworkSource` trait, the review API client and
//!   the response/record checks.
//! * **`verdict`**: the closed set of review statuses and their phrases.
//! * **`message`**: status-change and fault texts.
//! * **`notify/`**: the `Notifier` trait and the Telegram implementation.
//! * **`app`**: state carried between cycles (cursor, last message).
//! * **`poll`**: the cycle itself and the forever loop around it.
//! * **`main`**: wires everything together: environment, logging, clients.

mod app;
mod config;
mod error;
mod logger;
mod message;
mod notify;
mod poll;
mod source;
#[cfg(test)]
mod test_server;
mod verdict;

use std::process::ExitCode;

use anyhow::{Context, Result};

use app::BotState;
use config::Config;
use notify::TelegramNotifier;
use poll::Poller;
use source::PracticumClient;

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let _log_guard = logger::init_logging()?;

    // -- configuration faults are fatal and never retried --------------------
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration is incomplete, bot stopped");
            return Ok(ExitCode::FAILURE);
        }
    };

    // -- clients ---------------------------------------------------------------
    let source = PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.as_str(),
        config.http_timeout,
    )
    .context("failed to build review API client")?;
    let notifier = TelegramNotifier::new(
        &config.telegram_api_url,
        &config.telegram_token,
        config.chat_id.as_str(),
        config.http_timeout,
    )
    .context("failed to build Telegram client")?;

    tracing::info!(
        endpoint = %source.endpoint(),
        chat_id = %config.chat_id,
        "homework bot starting"
    );

    // -- poll forever, starting from now ---------------------------------------
    let state = BotState::new(chrono::Utc::now().timestamp());
    Poller::new(Box::new(source), Box::new(notifier), state, config.retry_period).run()
}
