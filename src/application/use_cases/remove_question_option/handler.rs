use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{QuestionOptionRepository, QuestionRepository, Repository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::{command::RemoveQuestionOptionCommand, result::RemoveQuestionOptionResult};

/// Use case handler for removing an option through its owning question
pub struct RemoveQuestionOptionHandler {
    question_repository: Arc<dyn QuestionRepository>,
    option_repository: Arc<dyn QuestionOptionRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RemoveQuestionOptionHandler {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        option_repository: Arc<dyn QuestionOptionRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            question_repository,
            option_repository,
            unit_of_work,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<RemoveQuestionOptionCommand, RemoveQuestionOptionResult>
    for RemoveQuestionOptionHandler
{
    async fn execute(
        &self,
        command: RemoveQuestionOptionCommand,
    ) -> AppResult<RemoveQuestionOptionResult> {
        command.validate().into_result()?;

        let Some(mut question) = self
            .question_repository
            .find_by_id(command.question_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                command.question_id
            )));
        };

        question.remove_option(command.option_id)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut question]);

        rollback_on_error(
            self.unit_of_work.as_ref(),
            self.option_repository.delete(command.option_id).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(RemoveQuestionOptionResult::new(
            command.question_id,
            command.option_id,
        ))
    }
}
