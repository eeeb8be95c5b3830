//! Texts the bot produces.
//!
//! De-duplication in the polling loop compares these strings directly, so
//! two faults with the same rendered text count as the same notification.

use serde_json::Value;

use crate::error::{BotError, Result};
use crate::source::Homework;

/// Logged when a poll returns no new homework.  Never sent to the chat.
pub const STATUS_UNCHANGED: &str = "Статус не изменился";

/// Render a raw homework record as a status-change notification.
pub fn status_message(record: &Value) -> Result<String> {
    let homework = Homework::from_record(record)?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name, homework.verdict
    ))
}

/// Render a cycle fault for the chat.
pub fn failure_message(error: &BotError) -> String {
    format!("Сбой в работе программы: {error}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::verdict::Verdict;

    #[test]
    fn status_message_names_homework_and_verdict() {
        let record = json!({"homework_name": "hw1", "status": "approved"});
        let message = status_message(&record).unwrap();
        assert!(message.contains("hw1"));
        assert!(message.contains(Verdict::Approved.phrase()));
    }

    #[test]
    fn unknown_status_iff_not_a_verdict() {
        for code in ["approved", "reviewing", "rejected", "unknown_status", "APPROVED", ""] {
            let record = json!({"homework_name": "hw1", "status": code});
            let known = Verdict::ALL.iter().any(|v| v.code() == code);
            let result = status_message(&record);
            assert_eq!(
                matches!(result, Err(BotError::UnknownStatus(_))),
                !known,
                "status {code:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn status_message_requires_name() {
        let err = status_message(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(err, BotError::MissingField("homework_name")));
    }

    #[test]
    fn failure_message_embeds_error_text() {
        let err = BotError::UnknownStatus("unknown_status".into());
        let message = failure_message(&err);
        assert!(message.starts_with("Сбой в работе программы: "));
        assert!(message.contains("unknown_status"));
    }

    #[test]
    fn equal_faults_render_equal_messages() {
        let a = failure_message(&BotError::MissingField("homeworks"));
        let b = failure_message(&BotError::MissingField("homeworks"));
        assert_eq!(a, b);
    }
}
