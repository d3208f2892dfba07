use crate::domain::value_objects::SUBJECT_NAME_MAX_LEN;
use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for creating a new subject
#[derive(Debug, Clone)]
pub struct CreateSubjectCommand {
    pub name: String,
}

impl CreateSubjectCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ValidateRequest for CreateSubjectCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_non_empty(&mut report, "name", &self.name);
        rules::require_max_len(&mut report, "name", &self.name, SUBJECT_NAME_MAX_LEN);
        report
    }
}
