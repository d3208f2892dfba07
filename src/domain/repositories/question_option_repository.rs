use async_trait::async_trait;

use crate::domain::entities::QuestionOption;
use crate::domain::repositories::Repository;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait QuestionOptionRepository: Repository<QuestionOption> {
    async fn find_by_question(&self, question_id: i32) -> AppResult<Vec<QuestionOption>>;
}
