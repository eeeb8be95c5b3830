//! Where homework statuses come from.
//!
//! This module defines the [`HomeworkSource`] trait the polling loop talks to,
//! the concrete client for the review API ([`PracticumClient`]) and the
//! payload checks in [`homework`].
//!
//! ## For contributors
//!
//! The loop only ever sees raw JSON from a source.  Envelope validation
//! ([`validate_response`]) and record validation ([`Homework::from_record`])
//! are pure functions, so a new source just has to produce the same JSON
//! shape.

pub mod homework;
mod practicum;

pub use homework::{current_date, validate_response, Homework};
pub use practicum::{PracticumClient, DEFAULT_ENDPOINT};

use serde_json::Value;

use crate::error::Result;

/// A remote API that reports homework review statuses.
#[cfg_attr(test, mockall::automock)]
pub trait HomeworkSource {
    /// Fetch every status change since `from_date` (Unix seconds).
    ///
    /// Implementations enforce transport, status-code and JSON decoding checks
    /// and return the decoded body unchanged.
    fn fetch(&self, from_date: i64) -> Result<Value>;
}
