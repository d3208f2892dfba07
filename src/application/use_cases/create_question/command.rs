use crate::domain::value_objects::{OPTION_TEXT_MAX_LEN, QUESTION_TEXT_MAX_LEN};
use crate::shared::validation::{rules, ValidateRequest, ValidationReport};

/// Initial option carried on a create-question request.
#[derive(Debug, Clone)]
pub struct NewQuestionOption {
    pub option_text: String,
    pub is_correct: bool,
}

impl NewQuestionOption {
    pub fn new(option_text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            option_text: option_text.into(),
            is_correct,
        }
    }
}

/// Command for adding a question to a topic
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    pub topic_id: i32,
    pub question_text: String,
    pub difficulty_level: i32,
    pub max_score: i32,
    pub generated_by: String,
    pub source_reference: Option<String>,
    pub options: Vec<NewQuestionOption>,
    /// When set, the question must leave this handler answerable: the
    /// correct-answer rule is checked before anything is persisted.
    pub finalized: bool,
}

impl CreateQuestionCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        topic_id: i32,
        question_text: impl Into<String>,
        difficulty_level: i32,
        max_score: i32,
        generated_by: impl Into<String>,
        source_reference: Option<String>,
        options: Vec<NewQuestionOption>,
        finalized: bool,
    ) -> Self {
        Self {
            topic_id,
            question_text: question_text.into(),
            difficulty_level,
            max_score,
            generated_by: generated_by.into(),
            source_reference,
            options,
            finalized,
        }
    }
}

impl ValidateRequest for CreateQuestionCommand {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::valid();
        rules::require_positive_id(&mut report, "topic_id", self.topic_id);
        rules::require_non_empty(&mut report, "question_text", &self.question_text);
        rules::require_max_len(
            &mut report,
            "question_text",
            &self.question_text,
            QUESTION_TEXT_MAX_LEN,
        );
        rules::require_non_empty(&mut report, "generated_by", &self.generated_by);
        for (i, option) in self.options.iter().enumerate() {
            let field = format!("options[{}].option_text", i);
            rules::require_non_empty(&mut report, &field, &option.option_text);
            rules::require_max_len(&mut report, &field, &option.option_text, OPTION_TEXT_MAX_LEN);
        }
        report
    }
}
