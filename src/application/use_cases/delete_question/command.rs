use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for removing a question from its topic
#[derive(Debug, Clone)]
pub struct DeleteQuestionCommand {
    pub id: i32,
}

impl DeleteQuestionCommand {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl ValidateRequest for DeleteQuestionCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "id", self.id);
        report
    }
}
