use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_option_response;
use crate::application::dto::OptionResponse;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::entities::AggregateRoot;
use crate::domain::repositories::{QuestionOptionRepository, QuestionRepository, Repository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::command::UpdateQuestionOptionCommand;

/// Use case handler for updating an option through its owning question
pub struct UpdateQuestionOptionHandler {
    question_repository: Arc<dyn QuestionRepository>,
    option_repository: Arc<dyn QuestionOptionRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateQuestionOptionHandler {
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
impl UseCase<UpdateQuestionOptionCommand, OptionResponse> for UpdateQuestionOptionHandler {
    async fn execute(&self, command: UpdateQuestionOptionCommand) -> AppResult<OptionResponse> {
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

        question.update_option(command.option_id, &command.option_text, command.is_correct)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut question]);

        let option = question
            .options()
            .iter()
            .find(|o| o.id() == command.option_id)
            .ok_or_else(|| {
                AppError::Internal("Updated option missing from aggregate".to_string())
            })?;

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.option_repository.update(option).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(to_option_response(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixtures;
    use crate::application::testing::{
        CollectingEventPublisher, FakeUnitOfWork, MockOptionRepo, MockQuestionRepo,
    };

    #[tokio::test]
    async fn option_not_loaded_on_question_reports_not_found() {
        let mut questions = MockQuestionRepo::new();
        questions
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::question(id, 3, "What is X?", Vec::new()))));
        let mut options = MockOptionRepo::new();
        options.expect_update().never();

        let handler = UpdateQuestionOptionHandler::new(
            Arc::new(questions),
            Arc::new(options),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(UpdateQuestionOptionCommand::new(9, 11, "5", false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
