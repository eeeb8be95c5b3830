//! Telegram Bot API notifier.
//!
//! Uses a single method of the Bot API, `sendMessage`, over the same blocking
//! `reqwest` stack as the review API client.  The bot token is part of the
//! request path, so transport errors are stripped of their URL before they
//! are reported anywhere.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::Notifier;
use crate::error::{BotError, Result};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// The envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
struct BotReply {
    ok: bool,
    description: Option<String>,
}

pub struct TelegramNotifier {
    http: Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        api_url: &str,
        token: &str,
        chat_id: impl Into<String>,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            send_url: format!("{}/bot{token}/sendMessage", api_url.trim_end_matches('/')),
            chat_id: chat_id.into(),
        })
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: message,
        };
        let response = self
            .http
            .post(&self.send_url)
            .json(&payload)
            .send()
            .map_err(|e| BotError::Send(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| BotError::Send(e.without_url().to_string()))?;
        check_reply(status, &body)?;

        tracing::debug!(chat_id = %self.chat_id, "message sent");
        Ok(())
    }
}

/// Interpret a `sendMessage` reply.
///
/// The Bot API reports failures (blocked bot, unknown chat, ...) as
/// `{"ok": false, "description": ...}`, usually with a 4xx status.
fn check_reply(status: StatusCode, body: &str) -> Result<()> {
    match serde_json::from_str::<BotReply>(body) {
        Ok(reply) if reply.ok && status.is_success() => Ok(()),
        Ok(reply) => Err(BotError::Send(
            reply
                .description
                .unwrap_or_else(|| format!("bot API answered with status {status}")),
        )),
        Err(_) => Err(BotError::Send(format!(
            "bot API answered with status {status} and an unreadable body"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::test_server;

    const TOKEN: &str = "123:secret";

    #[test]
    fn check_reply_accepts_ok() {
        assert!(check_reply(StatusCode::OK, r#"{"ok": true, "result": {}}"#).is_ok());
    }

    #[test]
    fn check_reply_surfaces_description() {
        let err = check_reply(
            StatusCode::BAD_REQUEST,
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BotError::Send(ref msg) if msg == "Bad Request: chat not found"));
    }

    #[test]
    fn check_reply_rejects_unreadable_body() {
        let err = check_reply(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert!(matches!(err, BotError::Send(ref msg) if msg.contains("502")));
    }

    #[test]
    fn notify_posts_chat_id_and_text() {
        let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
        let sink = seen.clone();
        let router = Router::new().route(
            &format!("/bot{TOKEN}/sendMessage"),
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(body);
                    Json(json!({"ok": true, "result": {"message_id": 1}}))
                }
            }),
        );
        let base = test_server::serve(router);

        let notifier = TelegramNotifier::new(&format!("{base}/"), TOKEN, "42", None).unwrap();
        notifier.notify("привет").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], json!({"chat_id": "42", "text": "привет"}));
    }

    #[test]
    fn notify_reports_rejected_message() {
        let router = Router::new().route(
            &format!("/bot{TOKEN}/sendMessage"),
            post(|| async {
                (
                    axum::http::StatusCode::FORBIDDEN,
                    Json(json!({
                        "ok": false,
                        "description": "Forbidden: bot was blocked by the user"
                    })),
                )
            }),
        );
        let base = test_server::serve(router);

        let notifier = TelegramNotifier::new(&base, TOKEN, "42", None).unwrap();
        let err = notifier.notify("hi").unwrap_err();
        assert!(matches!(err, BotError::Send(ref msg) if msg.contains("blocked")));
    }

    #[test]
    fn transport_failure_does_not_leak_token() {
        let notifier = TelegramNotifier::new(&test_server::dead_url(), TOKEN, "42", None).unwrap();
        let err = notifier.notify("hi").unwrap_err();
        assert!(matches!(err, BotError::Send(_)));
        assert!(!err.to_string().contains("secret"));
    }
}
