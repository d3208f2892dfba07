/// Query for fetching a single topic with its loaded questions
#[derive(Debug, Clone)]
pub struct GetTopicQuery {
    pub id: i32,
}

impl GetTopicQuery {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}
