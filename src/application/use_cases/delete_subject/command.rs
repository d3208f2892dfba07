use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for deleting a subject and everything under it
#[derive(Debug, Clone)]
pub struct DeleteSubjectCommand {
    pub id: i32,
}

impl DeleteSubjectCommand {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl ValidateRequest for DeleteSubjectCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "id", self.id);
        report
    }
}
