/// Query for listing the topics of one subject
#[derive(Debug, Clone)]
pub struct ListTopicsQuery {
    pub subject_id: i32,
}

impl ListTopicsQuery {
    pub fn new(subject_id: i32) -> Self {
        Self { subject_id }
    }
}
