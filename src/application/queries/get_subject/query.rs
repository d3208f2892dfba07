/// Query for fetching a single subject with its loaded topics
#[derive(Debug, Clone)]
pub struct GetSubjectQuery {
    pub id: i32,
}

impl GetSubjectQuery {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}
