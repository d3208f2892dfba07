use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for removing an answer option from a question
#[derive(Debug, Clone)]
pub struct RemoveQuestionOptionCommand {
    pub question_id: i32,
    pub option_id: i32,
}

impl RemoveQuestionOptionCommand {
    pub fn new(question_id: i32, option_id: i32) -> Self {
        Self {
            question_id,
            option_id,
        }
    }
}

impl ValidateRequest for RemoveQuestionOptionCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "question_id", self.question_id);
        rules::require_positive_id(&mut report, "option_id", self.option_id);
        report
    }
}
