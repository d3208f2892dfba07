use async_trait::async_trait;

use crate::domain::entities::Topic;
use crate::domain::repositories::Repository;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait TopicRepository: Repository<Topic> {
    async fn find_by_subject(&self, subject_id: i32) -> AppResult<Vec<Topic>>;

    /// Uniqueness is scoped to the parent subject.
    async fn exists_by_name_and_subject(
        &self,
        name: &str,
        subject_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<bool>;
}
