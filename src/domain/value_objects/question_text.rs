use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const QUESTION_TEXT_MAX_LEN: usize = 1000;

/// Question body, unique within its parent topic. Free-form text; only
/// emptiness and length are constrained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionText(String);

impl QuestionText {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::DomainValidation(
                "Question text cannot be empty".to_string(),
            ));
        }
        if raw.chars().count() > QUESTION_TEXT_MAX_LEN {
            return Err(AppError::DomainValidation(format!(
                "Question text too long (max {} characters)",
                QUESTION_TEXT_MAX_LEN
            )));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for QuestionText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_including_punctuation() {
        let text = QuestionText::new("What is 2+2=?").unwrap();
        assert_eq!(text.as_str(), "What is 2+2=?");
    }

    #[test]
    fn length_boundary() {
        assert!(QuestionText::new("q".repeat(QUESTION_TEXT_MAX_LEN)).is_ok());
        assert!(QuestionText::new("q".repeat(QUESTION_TEXT_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn empty_rejected() {
        assert!(QuestionText::new(" ").is_err());
    }
}
