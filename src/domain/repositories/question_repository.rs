use async_trait::async_trait;

use crate::domain::entities::Question;
use crate::domain::repositories::Repository;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait QuestionRepository: Repository<Question> {
    async fn find_by_topic(&self, topic_id: i32) -> AppResult<Vec<Question>>;

    /// Uniqueness is scoped to the parent topic.
    async fn exists_by_text_and_topic(
        &self,
        text: &str,
        topic_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<bool>;
}
