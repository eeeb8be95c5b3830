//! Client for the Practicum homework review API.
//!
//! One blocking `GET` per cycle:
//!
//! ```text
//! GET <endpoint>?from_date=<cursor>
//! Authorization: OAuth <token>
//! ```
//!
//! The response checks are split into pure functions ([`check_status`],
//! [`decode_body`]) so tests can exercise them without a server.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::HomeworkSource;
use crate::error::{BotError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

pub struct PracticumClient {
    http: Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Build a client for `endpoint` authenticating with `token`.
    ///
    /// When `timeout` is `None` the transport's default request timeout
    /// applies.
    pub fn new(
        endpoint: Url,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
            token: token.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl HomeworkSource for PracticumClient {
    fn fetch(&self, from_date: i64) -> Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "requesting homework statuses");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(BotError::Transport)?;

        check_status(response.status(), response.headers(), response.url())?;

        let body = response.text().map_err(BotError::Transport)?;
        decode_body(&body)
    }
}

/// Anything but `200 OK` is a protocol fault carrying the full context.
pub fn check_status(status: StatusCode, headers: &HeaderMap, url: &Url) -> Result<()> {
    if status == StatusCode::OK {
        return Ok(());
    }
    Err(BotError::HttpStatus {
        status,
        headers: headers.clone(),
        url: url.clone(),
    })
}

pub fn decode_body(body: &str) -> Result<Value> {
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
