//! Subject name with construction-time validation

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const SUBJECT_NAME_MAX_LEN: usize = 200;

/// Validated subject name. Globally unique across subjects; uniqueness is
/// checked case-insensitively by the owning aggregate and the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectName(String);

impl SubjectName {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AppError::DomainValidation(
                "Subject name cannot be empty".to_string(),
            ));
        }
        if raw.chars().count() > SUBJECT_NAME_MAX_LEN {
            return Err(AppError::DomainValidation(format!(
                "Subject name too long (max {} characters)",
                SUBJECT_NAME_MAX_LEN
            )));
        }

        let re = Regex::new(r"^[a-zA-Z0-9 ]+$").unwrap();
        if !re.is_match(&raw) {
            return Err(AppError::DomainValidation(
                "Subject name may only contain letters, digits and spaces".to_string(),
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

    /// Case-insensitive comparison used for uniqueness checks.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for SubjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_round_trips() {
        let name = SubjectName::new("Mathematics 101").unwrap();
        assert_eq!(name.as_str(), "Mathematics 101");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(
            SubjectName::new(""),
            Err(AppError::DomainValidation(_))
        ));
        assert!(matches!(
            SubjectName::new("   "),
            Err(AppError::DomainValidation(_))
        ));
    }

    #[test]
    fn over_long_name_rejected() {
        let raw = "a".repeat(SUBJECT_NAME_MAX_LEN + 1);
        assert!(SubjectName::new(raw).is_err());
        assert!(SubjectName::new("a".repeat(SUBJECT_NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn punctuation_rejected() {
        assert!(SubjectName::new("Math!").is_err());
        assert!(SubjectName::new("Math-01").is_err());
    }

    #[test]
    fn matches_is_case_insensitive() {
        let name = SubjectName::new("Math").unwrap();
        assert!(name.matches("math"));
        assert!(name.matches("MATH"));
        assert!(!name.matches("maths"));
    }
}
