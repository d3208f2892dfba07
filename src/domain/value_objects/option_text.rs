use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const OPTION_TEXT_MAX_LEN: usize = 4000;

/// Answer option body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionText(String);

impl OptionText {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::DomainValidation(
                "Option text cannot be empty".to_string(),
            ));
        }
        if raw.chars().count() > OPTION_TEXT_MAX_LEN {
            return Err(AppError::DomainValidation(format!(
                "Option text too long (max {} characters)",
                OPTION_TEXT_MAX_LEN
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
}

impl std::fmt::Display for OptionText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        assert_eq!(OptionText::new("4").unwrap().as_str(), "4");
    }

    #[test]
    fn length_boundary() {
        assert!(OptionText::new("o".repeat(OPTION_TEXT_MAX_LEN)).is_ok());
        assert!(OptionText::new("o".repeat(OPTION_TEXT_MAX_LEN + 1)).is_err());
    }
}
