use crate::domain::value_objects::OPTION_TEXT_MAX_LEN;
use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for updating an answer option
#[derive(Debug, Clone)]
pub struct UpdateQuestionOptionCommand {
    pub question_id: i32,
    pub option_id: i32,
    pub option_text: String,
    pub is_correct: bool,
}

impl UpdateQuestionOptionCommand {
    pub fn new(
        question_id: i32,
        option_id: i32,
        option_text: impl Into<String>,
        is_correct: bool,
    ) -> Self {
        Self {
            question_id,
            option_id,
            option_text: option_text.into(),
            is_correct,
        }
    }
}

impl ValidateRequest for UpdateQuestionOptionCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "question_id", self.question_id);
        rules::require_positive_id(&mut report, "option_id", self.option_id);
        rules::require_non_empty(&mut report, "option_text", &self.option_text);
        rules::require_max_len(
            &mut report,
            "option_text",
            &self.option_text,
            OPTION_TEXT_MAX_LEN,
        );
        report
    }
}
