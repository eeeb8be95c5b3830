//! The review API payload: response envelope checks and homework records.
//!
//! The review API answers with
//!
//! ```json
//! { "homeworks": [ { "homework_name": "...", "status": "approved", ... } ],
//!   "current_date": 1700000000 }
//! ```
//!
//! [`validate_response`] enforces the envelope only.  Individual records are
//! checked lazily by [`Homework::from_record`], and only for the record the
//! bot actually reports on (the newest one).

use serde_json::Value;

use crate::error::{BotError, Result};
use crate::verdict::Verdict;

/// A homework record that passed validation.
///
/// Any extra fields the API sends (`id`, `reviewer_comment`, `date_updated`,
/// ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Non-empty `homework_name` as sent by the API.
    pub name: String,
    pub verdict: Verdict,
}

impl Homework {
    /// Validate a raw record.
    ///
    /// The name is checked before the status, so a record broken in both ways
    /// reports the missing name.  A status that is absent or not a string is
    /// treated as unknown.
    pub fn from_record(record: &Value) -> Result<Self> {
        let name = record
            .get("homework_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(BotError::MissingField("homework_name"))?;

        let status = record.get("status").unwrap_or(&Value::Null);
        let verdict = match status.as_str() {
            Some(code) => code.parse()?,
            None => return Err(BotError::UnknownStatus(status.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            verdict,
        })
    }
}

/// Check the response envelope and return the `homeworks` list verbatim.
pub fn validate_response(raw: &Value) -> Result<&[Value]> {
    let object = raw
        .as_object()
        .ok_or_else(|| BotError::Shape(format!("expected a JSON object, got {}", kind(raw))))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(BotError::MissingField("homeworks"))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| {
            BotError::Shape(format!("`homeworks` must be a list, got {}", kind(homeworks)))
        })
}

/// The server-side cursor for the next poll, if the response carries one.
pub fn current_date(raw: &Value) -> Option<i64> {
    raw.get("current_date").and_then(Value::as_i64)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
