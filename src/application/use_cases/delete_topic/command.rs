use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for removing a topic from its subject
#[derive(Debug, Clone)]
pub struct DeleteTopicCommand {
    pub id: i32,
}

impl DeleteTopicCommand {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

impl ValidateRequest for DeleteTopicCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "id", self.id);
        report
    }
}
