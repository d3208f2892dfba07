/// Result of deleting a subject
#[derive(Debug, Clone)]
pub struct DeleteSubjectResult {
    pub id: i32,
}

impl DeleteSubjectResult {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}
