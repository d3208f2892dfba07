use serde::{Deserialize, Serialize};
use url::Url;

use crate::shared::errors::{AppError, AppResult};

/// Optional reference to where a question came from. When present it must
/// be a syntactically valid absolute URL; relative references are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceReference(String);

impl SourceReference {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();

        // Url::parse only succeeds for absolute URLs.
        Url::parse(&raw).map_err(|e| {
            AppError::DomainValidation(format!("Source reference is not a valid URL: {}", e))
        })?;

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SourceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_accepted() {
        let source = SourceReference::new("https://example.com/q/1").unwrap();
        assert_eq!(source.as_str(), "https://example.com/q/1");
    }

    #[test]
    fn non_url_rejected() {
        assert!(matches!(
            SourceReference::new("not-a-url"),
            Err(AppError::DomainValidation(_))
        ));
    }

    #[test]
    fn relative_reference_rejected() {
        assert!(SourceReference::new("/questions/1").is_err());
    }
}
