//! Review verdicts and the phrases the bot uses for them.
//!
//! The set of statuses is closed: anything the review API sends outside of
//! these three is rejected with [`BotError::UnknownStatus`].

use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// The status code as it appears on the wire.
    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Human-readable phrase sent to the chat.
    pub fn phrase(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for Verdict {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verdict::ALL
            .into_iter()
            .find(|v| v.code() == s)
            .ok_or_else(|| BotError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_code() {
        for verdict in Verdict::ALL {
            assert_eq!(verdict.code().parse::<Verdict>().unwrap(), verdict);
        }
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "unknown_status".parse::<Verdict>().unwrap_err();
        assert!(matches!(err, BotError::UnknownStatus(ref s) if s == "unknown_status"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!("Approved".parse::<Verdict>().is_err());
    }

    #[test]
    fn phrases_are_distinct() {
        let phrases: Vec<_> = Verdict::ALL.iter().map(|v| v.phrase()).collect();
        assert_ne!(phrases[0], phrases[1]);
        assert_ne!(phrases[1], phrases[2]);
        assert_ne!(phrases[0], phrases[2]);
    }
}
