//! Runtime configuration, read once from the environment at startup.
//!
//! `main` loads `.env` (if any) before calling [`Config::from_env`], so the
//! variables can live in either place.

use std::env;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::notify::DEFAULT_API_URL;
use crate::source::DEFAULT_ENDPOINT;

/// Seconds between two poll cycles unless `RETRY_PERIOD` says otherwise.
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

const REQUIRED: [&str; 3] = ["TELEGRAM_TOKEN", "PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variables are not set: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub practicum_token: String,
    pub chat_id: String,
    pub endpoint: Url,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    /// Per-request HTTP timeout; `None` keeps the transport default.
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Every missing required variable is reported at once.  Values are
    /// trimmed, and blank ones count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<&'static str> = REQUIRED
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        let [telegram_token, practicum_token, chat_id] =
            REQUIRED.map(|key| get(key).unwrap_or_default());

        let endpoint_raw = get("ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint_raw).map_err(|_| ConfigError::Invalid {
            var: "ENDPOINT",
            value: endpoint_raw.clone(),
        })?;

        let retry_period = seconds(&get, "RETRY_PERIOD")?.unwrap_or(DEFAULT_RETRY_PERIOD);
        let http_timeout = seconds(&get, "HTTP_TIMEOUT")?;

        Ok(Self {
            telegram_token,
            practicum_token,
            chat_id,
            endpoint,
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            retry_period,
            http_timeout,
        })
    }
}

fn seconds(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = get(var) else {
        return Ok(None);
    };
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::Invalid { var, value }),
    }
}
