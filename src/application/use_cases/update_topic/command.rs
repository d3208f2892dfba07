use crate::domain::value_objects::TOPIC_NAME_MAX_LEN;
use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for renaming an existing topic
#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    pub id: i32,
    pub name: String,
}

impl UpdateTopicCommand {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl ValidateRequest for UpdateTopicCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "id", self.id);
        rules::require_non_empty(&mut report, "name", &self.name);
        rules::require_max_len(&mut report, "name", &self.name, TOPIC_NAME_MAX_LEN);
        report
    }
}
