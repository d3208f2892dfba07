/// Query for fetching a single question with its options
#[derive(Debug, Clone)]
pub struct GetQuestionQuery {
    pub id: i32,
}

impl GetQuestionQuery {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}
