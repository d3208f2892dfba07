use crate::domain::value_objects::TOPIC_NAME_MAX_LEN;
use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for adding a topic to a subject
#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    pub subject_id: i32,
    pub name: String,
}

impl CreateTopicCommand {
    pub fn new(subject_id: i32, name: impl Into<String>) -> Self {
        Self {
            subject_id,
            name: name.into(),
        }
    }
}

impl ValidateRequest for CreateTopicCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "subject_id", self.subject_id);
        rules::require_non_empty(&mut report, "name", &self.name);
        rules::require_max_len(&mut report, "name", &self.name, TOPIC_NAME_MAX_LEN);
        report
    }
}
