/// Result of removing an option
#[derive(Debug, Clone)]
pub struct RemoveQuestionOptionResult {
    pub question_id: i32,
    pub option_id: i32,
}

impl RemoveQuestionOptionResult {
    pub fn new(question_id: i32, option_id: i32) -> Self {
        Self {
            question_id,
            option_id,
        }
    }
}
