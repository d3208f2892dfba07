use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_question_response;
use crate::application::dto::QuestionResponse;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{QuestionRepository, Repository, TopicRepository};
use crate::domain::value_objects::GeneratedBy;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::command::UpdateQuestionCommand;

/// Use case handler for updating a question
pub struct UpdateQuestionHandler {
    question_repository: Arc<dyn QuestionRepository>,
    topic_repository: Arc<dyn TopicRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateQuestionHandler {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        topic_repository: Arc<dyn TopicRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            question_repository,
            topic_repository,
            unit_of_work,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<UpdateQuestionCommand, QuestionResponse> for UpdateQuestionHandler {
    async fn execute(&self, command: UpdateQuestionCommand) -> AppResult<QuestionResponse> {
        command.validate().into_result()?;

        let generated_by = GeneratedBy::parse(&command.generated_by)?;

        let Some(mut question) = self.question_repository.find_by_id(command.id).await? else {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                command.id
            )));
        };

        if self
            .question_repository
            .exists_by_text_and_topic(&command.question_text, question.topic_id(), Some(command.id))
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Question '{}' already exists in topic {}",
                command.question_text,
                question.topic_id()
            )));
        }

        question.update(
            &command.question_text,
            command.difficulty_level,
            command.max_score,
            generated_by,
            command.source_reference.as_deref(),
        )?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut question]);

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.question_repository.update(&question).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        let Some(topic) = self.topic_repository.find_by_id(saved.topic_id()).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                saved.topic_id()
            )));
        };

        Ok(to_question_response(&saved, topic.name().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixtures;
    use crate::application::testing::{
        CollectingEventPublisher, FakeUnitOfWork, MockQuestionRepo, MockTopicRepo,
    };

    #[tokio::test]
    async fn invalid_difficulty_fails_with_domain_validation() {
        let mut questions = MockQuestionRepo::new();
        questions
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::question(id, 3, "What is X?", Vec::new()))));
        questions
            .expect_exists_by_text_and_topic()
            .returning(|_, _, _| Ok(false));
        questions.expect_update().never();

        let handler = UpdateQuestionHandler::new(
            Arc::new(questions),
            Arc::new(MockTopicRepo::new()),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(UpdateQuestionCommand::new(9, "What is X?", 6, 1, "ai", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DomainValidation(_)));
    }

    #[tokio::test]
    async fn update_flattens_topic_name_into_response() {
        let mut questions = MockQuestionRepo::new();
        questions
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::question(id, 3, "What is X?", Vec::new()))));
        questions
            .expect_exists_by_text_and_topic()
            .returning(|_, _, _| Ok(false));
        questions
            .expect_update()
            .returning(|_| Ok(fixtures::question(9, 3, "What is Y?", Vec::new())));

        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));

        let handler = UpdateQuestionHandler::new(
            Arc::new(questions),
            Arc::new(topics),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let response = handler
            .execute(UpdateQuestionCommand::new(9, "What is Y?", 1, 1, "ai", None))
            .await
            .unwrap();
        assert_eq!(response.question_text, "What is Y?");
        assert_eq!(response.topic_name, "Algebra");
    }
}
