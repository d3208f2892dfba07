use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Provenance of a question.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::infrastructure::database::schema::sql_types::GeneratedByKind"]
pub enum GeneratedBy {
    Ai,
    Manual,
    Imported,
}

impl GeneratedBy {
    /// Parse a caller-supplied source label. Accepts the aliases external
    /// callers historically send ("user" for manual entry, "import").
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ai" => Ok(GeneratedBy::Ai),
            "manual" | "user" => Ok(GeneratedBy::Manual),
            "imported" | "import" => Ok(GeneratedBy::Imported),
            other => Err(AppError::DomainValidation(format!(
                "Unknown question source '{}'",
                other
            ))),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GeneratedBy::Ai => "AI",
            GeneratedBy::Manual => "Manual",
            GeneratedBy::Imported => "Imported",
        }
    }
}

impl fmt::Display for GeneratedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_labels() {
        assert_eq!(GeneratedBy::parse("AI").unwrap(), GeneratedBy::Ai);
        assert_eq!(GeneratedBy::parse("user").unwrap(), GeneratedBy::Manual);
        assert_eq!(GeneratedBy::parse("manual").unwrap(), GeneratedBy::Manual);
        assert_eq!(GeneratedBy::parse("import").unwrap(), GeneratedBy::Imported);
    }

    #[test]
    fn unknown_label_rejected() {
        assert!(matches!(
            GeneratedBy::parse("scraper"),
            Err(AppError::DomainValidation(_))
        ));
    }
}
