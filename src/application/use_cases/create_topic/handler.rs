use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_topic_response;
use crate::application::dto::TopicResponse;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{Repository, SubjectRepository, TopicRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::command::CreateTopicCommand;

/// Use case handler for adding a topic to a subject
pub struct CreateTopicHandler {
    subject_repository: Arc<dyn SubjectRepository>,
    topic_repository: Arc<dyn TopicRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateTopicHandler {
    pub fn new(
        subject_repository: Arc<dyn SubjectRepository>,
        topic_repository: Arc<dyn TopicRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            subject_repository,
            topic_repository,
            unit_of_work,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<CreateTopicCommand, TopicResponse> for CreateTopicHandler {
    async fn execute(&self, command: CreateTopicCommand) -> AppResult<TopicResponse> {
        command.validate().into_result()?;

        // The subject is loaded with its topics so the aggregate-level
        // duplicate check sees the full collection.
        let Some(mut subject) = self.subject_repository.find_by_id(command.subject_id).await?
        else {
            return Err(AppError::NotFound(format!(
                "Subject with id {} not found",
                command.subject_id
            )));
        };

        // Store-level backstop for writers racing on the same name.
        if self
            .topic_repository
            .exists_by_name_and_subject(&command.name, command.subject_id, None)
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Topic '{}' already exists in subject {}",
                command.name, command.subject_id
            )));
        }

        subject.add_topic(&command.name)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut subject]);

        let topic = subject
            .topics()
            .iter()
            .find(|t| t.name().matches(&command.name))
            .ok_or_else(|| AppError::Internal("Added topic missing from aggregate".to_string()))?;

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.topic_repository.save(topic).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(to_topic_response(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixtures;
    use crate::application::testing::{
        CollectingEventPublisher, FakeUnitOfWork, MockSubjectRepo, MockTopicRepo,
    };

    #[tokio::test]
    async fn unknown_subject_reports_not_found() {
        let mut subjects = MockSubjectRepo::new();
        subjects.expect_find_by_id().returning(|_| Ok(None));
        let topics = MockTopicRepo::new();

        let handler = CreateTopicHandler::new(
            Arc::new(subjects),
            Arc::new(topics),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(CreateTopicCommand::new(5, "Algebra"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_among_loaded_topics_is_rejected() {
        let mut subjects = MockSubjectRepo::new();
        subjects.expect_find_by_id().returning(|id| {
            let topics = vec![fixtures::topic(2, id, "Algebra", Vec::new())];
            Ok(Some(fixtures::subject(id, "Math", topics)))
        });
        let mut topics = MockTopicRepo::new();
        topics
            .expect_exists_by_name_and_subject()
            .returning(|_, _, _| Ok(false));
        topics.expect_save().never();

        let handler = CreateTopicHandler::new(
            Arc::new(subjects),
            Arc::new(topics),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        // Case-insensitive collision with the loaded "Algebra".
        let err = handler
            .execute(CreateTopicCommand::new(1, "ALGEBRA"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
    }

    #[tokio::test]
    async fn creates_topic_and_publishes_event() {
        let mut subjects = MockSubjectRepo::new();
        subjects
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::subject(id, "Math", Vec::new()))));
        let mut topics = MockTopicRepo::new();
        topics
            .expect_exists_by_name_and_subject()
            .returning(|_, _, _| Ok(false));
        topics
            .expect_save()
            .returning(|_| Ok(fixtures::topic(7, 1, "Algebra", Vec::new())));

        let publisher = Arc::new(CollectingEventPublisher::default());
        let handler = CreateTopicHandler::new(
            Arc::new(subjects),
            Arc::new(topics),
            Arc::new(FakeUnitOfWork::default()),
            publisher.clone(),
        );

        let response = handler
            .execute(CreateTopicCommand::new(1, "Algebra"))
            .await
            .unwrap();
        assert_eq!(response.id, 7);
        assert_eq!(response.subject_id, 1);
        assert_eq!(publisher.event_types(), vec!["TopicAddedToSubject"]);
    }
}
