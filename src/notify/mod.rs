//! Delivery of messages to the chat.

mod telegram;

pub use telegram::{TelegramNotifier, DEFAULT_API_URL};

use crate::error::Result;

/// Sends a text message to the configured chat.
///
/// Failures come back as [`crate::error::BotError::Send`]; the caller logs
/// them and carries on.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<()>;
}
