use crate::domain::value_objects::QUESTION_TEXT_MAX_LEN;
use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Command for updating a question's content and grading attributes
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    pub id: i32,
    pub question_text: String,
    pub difficulty_level: i32,
    pub max_score: i32,
    pub generated_by: String,
    pub source_reference: Option<String>,
}

impl UpdateQuestionCommand {
    pub fn new(
        id: i32,
        question_text: impl Into<String>,
        difficulty_level: i32,
        max_score: i32,
        generated_by: impl Into<String>,
        source_reference: Option<String>,
    ) -> Self {
        Self {
            id,
            question_text: question_text.into(),
            difficulty_level,
            max_score,
            generated_by: generated_by.into(),
            source_reference,
        }
    }
}

impl ValidateRequest for UpdateQuestionCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "id", self.id);
        rules::require_non_empty(&mut report, "question_text", &self.question_text);
        rules::require_max_len(
            &mut report,
            "question_text",
            &self.question_text,
            QUESTION_TEXT_MAX_LEN,
        );
        rules::require_non_empty(&mut report, "generated_by", &self.generated_by);
        report
    }
}
