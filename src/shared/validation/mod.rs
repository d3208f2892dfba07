//! Request-shape validation, applied by handlers before anything touches
//! the domain. Domain invariants themselves live in the value objects.

use crate::shared::errors::{AppError, AppResult};

/// A single field-level failure.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulated outcome of validating one request.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut report = Self::default();
        report.add(field, message);
        report
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.failures.push(ValidationFailure::new(field, message));
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Merge another report into this one.
    pub fn merge(mut self, other: ValidationReport) -> Self {
        self.failures.extend(other.failures);
        self
    }

    /// Any failure at all is a hard validation error.
    pub fn into_result(self) -> AppResult<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        let joined = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.field, f.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::Validation(joined))
    }
}

/// Implemented by every command/query that carries caller input.
pub trait ValidateRequest {
    fn validate(&self) -> ValidationReport;
}

/// Common field checks shared by command validators.
pub mod rules {
    use super::ValidationReport;

    pub fn require_non_empty(report: &mut ValidationReport, field: &str, value: &str) {
        if value.trim().is_empty() {
            report.add(field, "must not be empty");
        }
    }

    pub fn require_max_len(report: &mut ValidationReport, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            report.add(field, format!("must be at most {} characters", max));
        }
    }

    pub fn require_positive_id(report: &mut ValidationReport, field: &str, value: i32) {
        if value <= 0 {
            report.add(field, "must be a positive identifier");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: String,
    }

    impl ValidateRequest for Probe {
        fn validate(&self) -> ValidationReport {
            let mut report = ValidationReport::valid();
            rules::require_non_empty(&mut report, "name", &self.name);
            rules::require_max_len(&mut report, "name", &self.name, 5);
            report
        }
    }

    #[test]
    fn empty_report_is_ok() {
        assert!(ValidationReport::valid().into_result().is_ok());
    }

    #[test]
    fn failures_collapse_into_validation_error() {
        let probe = Probe {
            name: "much too long".into(),
        };
        let err = probe.validate().into_result().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn merge_concatenates_failures() {
        let merged = ValidationReport::invalid("a", "bad")
            .merge(ValidationReport::invalid("b", "worse"));
        assert_eq!(merged.failures().len(), 2);
    }
}
