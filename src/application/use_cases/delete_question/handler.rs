use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{QuestionRepository, Repository, TopicRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::{command::DeleteQuestionCommand, result::DeleteQuestionResult};

/// Use case handler for removing a question. Removal goes through the
/// owning topic so the aggregate raises the removal event; option rows go
/// with the cascade.
pub struct DeleteQuestionHandler {
    topic_repository: Arc<dyn TopicRepository>,
    question_repository: Arc<dyn QuestionRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteQuestionHandler {
    pub fn new(
        topic_repository: Arc<dyn TopicRepository>,
        question_repository: Arc<dyn QuestionRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            topic_repository,
            question_repository,
            unit_of_work,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<DeleteQuestionCommand, DeleteQuestionResult> for DeleteQuestionHandler {
    async fn execute(&self, command: DeleteQuestionCommand) -> AppResult<DeleteQuestionResult> {
        command.validate().into_result()?;

        let Some(question) = self.question_repository.find_by_id(command.id).await? else {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                command.id
            )));
        };
        let topic_id = question.topic_id();

        let Some(mut topic) = self.topic_repository.find_by_id(topic_id).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                topic_id
            )));
        };

        topic.remove_question(command.id)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut topic]);

        rollback_on_error(
            self.unit_of_work.as_ref(),
            self.question_repository.delete(command.id).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(DeleteQuestionResult::new(command.id, topic_id))
    }
}
