//! In-memory state carried from one poll cycle to the next.
//!
//! Nothing here survives a restart: after a restart the bot may repeat the
//! last notification once.

/// Poll cursor plus the last message delivered to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotState {
    cursor: i64,
    last_message: String,
}

impl BotState {
    /// Start polling from `cursor` (Unix seconds) with nothing sent yet.
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_message: String::new(),
        }
    }

    /// Start of the next fetch window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Whether `message` differs from the last one delivered.
    pub fn is_new(&self, message: &str) -> bool {
        self.last_message != message
    }

    /// Record a successful delivery.
    pub fn mark_sent(&mut self, message: String) {
        self.last_message = message;
    }

    /// Move the cursor to the server-supplied `current_date`.
    pub fn advance(&mut self, cursor: i64) {
        self.cursor = cursor;
    }
}
