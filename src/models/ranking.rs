// src/models/ranking.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::NICKNAME_MAX_CHARS;

/// `NICKNAME_MAX_CHARS` typed as `u64`, as required by `validator`'s length check.
const NICKNAME_MAX_CHARS_U64: u64 = NICKNAME_MAX_CHARS as u64;

/// A recorded result shown on the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    /// Number of correct answers.
    pub score: u32,
    /// Seconds from session start to registration, one decimal place.
    pub time_taken_seconds: f64,
}

/// Acknowledgement returned by a ranking write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveReceipt {
    pub message: String,
}

/// Form posted from the results screen.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, max = NICKNAME_MAX_CHARS_U64))]
    #[serde(default)]
    pub name: String,
}

impl RegisterForm {
    /// Surrounding whitespace does not count towards the nickname.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }

    /// Returns the warning to show the player when the nickname is unusable.
    pub fn warning(&self) -> Option<String> {
        match self.validate() {
            Ok(()) => None,
            Err(_) if self.name.is_empty() => Some("Please enter your nickname.".to_string()),
            Err(_) => Some(format!(
                "Nicknames can be at most {} characters.",
                NICKNAME_MAX_CHARS
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
        }
        .normalized()
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            form("").warning().as_deref(),
            Some("Please enter your nickname.")
        );
        assert_eq!(
            form("   ").warning().as_deref(),
            Some("Please enter your nickname.")
        );
    }

    #[test]
    fn six_characters_is_the_limit() {
        assert!(form("abcdef").warning().is_none());
        assert!(form("abcdefg").warning().is_some());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        assert!(form("ゲストさん１").warning().is_none());
        assert!(form("ゲストさんです").warning().is_some());
    }

    #[test]
    fn limit_matches_config_constant() {
        let at_limit = "x".repeat(NICKNAME_MAX_CHARS);
        let over = "x".repeat(NICKNAME_MAX_CHARS + 1);
        assert!(form(&at_limit).warning().is_none());
        assert!(form(&over).warning().is_some());
    }
}
