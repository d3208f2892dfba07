/// Query for listing the questions of one topic
#[derive(Debug, Clone)]
pub struct ListQuestionsQuery {
    pub topic_id: i32,
}

impl ListQuestionsQuery {
    pub fn new(topic_id: i32) -> Self {
        Self { topic_id }
    }
}
