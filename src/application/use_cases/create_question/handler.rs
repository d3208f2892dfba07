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

use super::command::CreateQuestionCommand;

/// Use case handler for adding a question (with its initial options) to a
/// topic
pub struct CreateQuestionHandler {
    topic_repository: Arc<dyn TopicRepository>,
    question_repository: Arc<dyn QuestionRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateQuestionHandler {
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
impl UseCase<CreateQuestionCommand, QuestionResponse> for CreateQuestionHandler {
    async fn execute(&self, command: CreateQuestionCommand) -> AppResult<QuestionResponse> {
        command.validate().into_result()?;

        let generated_by = GeneratedBy::parse(&command.generated_by)?;

        let Some(mut topic) = self.topic_repository.find_by_id(command.topic_id).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                command.topic_id
            )));
        };

        if self
            .question_repository
            .exists_by_text_and_topic(&command.question_text, command.topic_id, None)
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Question '{}' already exists in topic {}",
                command.question_text, command.topic_id
            )));
        }

        topic.add_question(
            &command.question_text,
            command.difficulty_level,
            command.max_score,
            generated_by,
            command.source_reference.as_deref(),
        )?;

        {
            let question = topic
                .question_mut(&command.question_text)
                .ok_or_else(|| {
                    AppError::Internal("Added question missing from aggregate".to_string())
                })?;
            for option in &command.options {
                question.add_option(&option.option_text, option.is_correct)?;
            }
            // The correct-answer rule is only checked on request; drafts
            // may be created without any options.
            if command.finalized {
                question.validate_has_correct_answer()?;
            }
        }

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut topic]);

        let question = topic
            .questions()
            .iter()
            .find(|q| q.text().matches(&command.question_text))
            .ok_or_else(|| {
                AppError::Internal("Added question missing from aggregate".to_string())
            })?;

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.question_repository.save(question).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

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
    use crate::application::use_cases::create_question::NewQuestionOption;

    fn command_with(options: Vec<NewQuestionOption>, finalized: bool) -> CreateQuestionCommand {
        CreateQuestionCommand::new(
            3,
            "What is 2+2=?",
            1,
            1,
            "manual",
            None,
            options,
            finalized,
        )
    }

    #[tokio::test]
    async fn unknown_topic_reports_not_found() {
        let mut topics = MockTopicRepo::new();
        topics.expect_find_by_id().returning(|_| Ok(None));
        let questions = MockQuestionRepo::new();

        let handler = CreateQuestionHandler::new(
            Arc::new(topics),
            Arc::new(questions),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(command_with(Vec::new(), false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn store_level_duplicate_is_rejected() {
        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));
        let mut questions = MockQuestionRepo::new();
        questions
            .expect_exists_by_text_and_topic()
            .returning(|_, _, _| Ok(true));
        questions.expect_save().never();

        let handler = CreateQuestionHandler::new(
            Arc::new(topics),
            Arc::new(questions),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(command_with(Vec::new(), false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
    }

    #[tokio::test]
    async fn finalized_question_without_correct_option_is_rejected() {
        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));
        let mut questions = MockQuestionRepo::new();
        questions
            .expect_exists_by_text_and_topic()
            .returning(|_, _, _| Ok(false));
        questions.expect_save().never();

        let handler = CreateQuestionHandler::new(
            Arc::new(topics),
            Arc::new(questions),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(command_with(
                vec![NewQuestionOption::new("3", false)],
                true,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));
    }

    #[tokio::test]
    async fn creates_question_with_options_and_publishes_events() {
        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));
        let mut questions = MockQuestionRepo::new();
        questions
            .expect_exists_by_text_and_topic()
            .returning(|_, _, _| Ok(false));
        questions.expect_save().returning(|_| {
            let options = vec![fixtures::option(11, 9, "4", true)];
            Ok(fixtures::question(9, 3, "What is 2+2=?", options))
        });

        let publisher = Arc::new(CollectingEventPublisher::default());
        let handler = CreateQuestionHandler::new(
            Arc::new(topics),
            Arc::new(questions),
            Arc::new(FakeUnitOfWork::default()),
            publisher.clone(),
        );

        let response = handler
            .execute(command_with(vec![NewQuestionOption::new("4", true)], true))
            .await
            .unwrap();

        assert_eq!(response.id, 9);
        assert_eq!(response.topic_name, "Algebra");
        assert_eq!(response.options.len(), 1);
        assert_eq!(
            publisher.event_types(),
            vec!["QuestionAddedToTopic", "OptionAddedToQuestion"]
        );
    }
}
