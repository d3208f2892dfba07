use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const TOPIC_NAME_MAX_LEN: usize = 200;

/// Validated topic name, unique within its parent subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicName(String);

impl TopicName {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::DomainValidation(
                "Topic name cannot be empty".to_string(),
            ));
        }
        if raw.chars().count() > TOPIC_NAME_MAX_LEN {
            return Err(AppError::DomainValidation(format!(
                "Topic name too long (max {} characters)",
                TOPIC_NAME_MAX_LEN
            )));
        }

        let re = Regex::new(r"^[a-zA-Z0-9 ]+$").unwrap();
        if !re.is_match(&raw) {
            return Err(AppError::DomainValidation(
                "Topic name may only contain letters, digits and spaces".to_string(),
            ));
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

impl std::fmt::Display for TopicName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_round_trips() {
        assert_eq!(TopicName::new("Algebra").unwrap().as_str(), "Algebra");
    }

    #[test]
    fn length_boundary() {
        assert!(TopicName::new("a".repeat(TOPIC_NAME_MAX_LEN)).is_ok());
        assert!(TopicName::new("a".repeat(TOPIC_NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn charset_enforced() {
        assert!(TopicName::new("Linear Algebra 2").is_ok());
        assert!(TopicName::new("Algebra/Geometry").is_err());
    }
}
