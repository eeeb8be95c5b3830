//! Faults that can abort a single poll cycle.
//!
//! Every step of a cycle (fetch, validate, format, notify) reports failure
//! through [`BotError`].  The polling loop inspects the variant exactly once,
//! logs it, and decides whether the chat should hear about it.  None of these
//! are fatal: the loop sleeps and tries again.
//!
//! Startup configuration faults are a different beast and live in
//! [`crate::config::ConfigError`].

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The HTTP request to the review API could not complete (DNS, refused
    /// connection, timeout, broken body stream).
    #[error("review API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The review API answered with something other than `200 OK`.
    #[error("review API {url} answered with status {status}")]
    HttpStatus {
        status: StatusCode,
        headers: HeaderMap,
        url: Url,
    },

    /// The response body was not valid JSON.
    #[error("review API response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value had the wrong JSON type.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// A required key was absent or empty.
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    /// The bot API refused or failed to deliver a message.
    #[error("failed to send message: {0}")]
    Send(String),
}

pub type Result<T, E = BotError> = std::result::Result<T, E>;
