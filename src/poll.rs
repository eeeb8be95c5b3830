//! The polling loop.
//!
//! Each cycle runs fetch → validate → format → notify and then sleeps for a
//! fixed interval, whatever happened.  Faults never escape a cycle: they are
//! logged, reported to the chat once per distinct text, and retried on the
//! next cycle.
//!
//! ## Cycle rules
//!
//! * Only the newest homework (the first element of `homeworks`) is
//!   reported.
//! * An empty `homeworks` list means "status unchanged"; that is logged and
//!   nothing is sent.
//! * A message is sent only if it differs from the last message delivered.
//!   Status changes and fault reports share this check.
//! * A failed delivery leaves the last-delivered message untouched.  The
//!   cursor still advances, so the message is only attempted again if the
//!   server reports that homework again (or the same fault recurs).
//! * The cursor moves to the server's `current_date` only when fetch,
//!   validate and format all succeeded.

use std::thread;
use std::time::Duration;

use crate::app::BotState;
use crate::error::{BotError, Result};
use crate::message::{failure_message, status_message, STATUS_UNCHANGED};
use crate::notify::Notifier;
use crate::source::{current_date, validate_response, HomeworkSource};

/// How a single cycle ended.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A new status message reached the chat.
    Notified,
    /// The status message was the one already delivered; nothing was sent.
    AlreadySent,
    /// No new homework since the cursor.
    Unchanged,
    /// A new status message could not be delivered.
    Undelivered,
    /// Fetch, validation or formatting failed; the cycle was aborted.
    Failed(BotError),
}

/// Result of the pure part of a cycle.
struct Check {
    /// Status message for the newest homework, if there is one.
    message: Option<String>,
    cursor: Option<i64>,
}

pub struct Poller {
    source: Box<dyn HomeworkSource>,
    notifier: Box<dyn Notifier>,
    state: BotState,
    interval: Duration,
}

impl Poller {
    pub fn new(
        source: Box<dyn HomeworkSource>,
        notifier: Box<dyn Notifier>,
        state: BotState,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            state,
            interval,
        }
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Poll forever.  Only an external signal stops the process.
    pub fn run(mut self) -> ! {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            cursor = self.state.cursor(),
            "polling started"
        );
        loop {
            let outcome = self.run_cycle();
            let state = self.state();
            tracing::debug!(
                ?outcome,
                cursor = state.cursor(),
                last_message = state.last_message(),
                "cycle finished"
            );
            thread::sleep(self.interval);
        }
    }

    /// Run one cycle without sleeping.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        match self.check() {
            Ok(Check { message, cursor }) => {
                let outcome = match message {
                    Some(message) => self.deliver(message),
                    None => {
                        tracing::info!(cursor = self.state.cursor(), "{STATUS_UNCHANGED}");
                        CycleOutcome::Unchanged
                    }
                };
                match cursor {
                    Some(cursor) => self.state.advance(cursor),
                    None => tracing::warn!(
                        cursor = self.state.cursor(),
                        "response has no integer current_date, keeping cursor"
                    ),
                }
                outcome
            }
            Err(err) => {
                log_fault(&err);
                self.deliver(failure_message(&err));
                CycleOutcome::Failed(err)
            }
        }
    }

    fn check(&self) -> Result<Check> {
        let raw = self.source.fetch(self.state.cursor())?;
        let homeworks = validate_response(&raw)?;
        let message = homeworks.first().map(status_message).transpose()?;
        Ok(Check {
            message,
            cursor: current_date(&raw),
        })
    }

    fn deliver(&mut self, message: String) -> CycleOutcome {
        if !self.state.is_new(&message) {
            tracing::debug!(%message, "message already delivered, not sending again");
            return CycleOutcome::AlreadySent;
        }
        match self.notifier.notify(&message) {
            Ok(()) => {
                tracing::info!(%message, "notification sent");
                self.state.mark_sent(message);
                CycleOutcome::Notified
            }
            Err(err) => {
                tracing::error!(error = %err, %message, "failed to deliver notification");
                CycleOutcome::Undelivered
            }
        }
    }
}

fn log_fault(err: &BotError) {
    match err {
        BotError::HttpStatus { status, headers, url } => tracing::error!(
            status = status.as_u16(),
            %url,
            ?headers,
            "review API answered with an unexpected status"
        ),
        BotError::Transport(source) => tracing::error!(error = %source, "review API unreachable"),
        other => tracing::error!(error = %other, "poll cycle failed"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
