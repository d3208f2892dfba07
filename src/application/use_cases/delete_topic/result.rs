/// Result of removing a topic
#[derive(Debug, Clone)]
pub struct DeleteTopicResult {
    pub id: i32,
    pub subject_id: i32,
}

impl DeleteTopicResult {
    pub fn new(id: i32, subject_id: i32) -> Self {
        Self { id, subject_id }
    }
}
