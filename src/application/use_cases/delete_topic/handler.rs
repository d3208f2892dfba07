use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{Repository, SubjectRepository, TopicRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::{command::DeleteTopicCommand, result::DeleteTopicResult};

/// Use case handler for removing a topic. Removal goes through the owning
/// subject so the aggregate raises the removal event; the store cascades
/// the delete to questions and options.
pub struct DeleteTopicHandler {
    subject_repository: Arc<dyn SubjectRepository>,
    topic_repository: Arc<dyn TopicRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteTopicHandler {
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
impl UseCase<DeleteTopicCommand, DeleteTopicResult> for DeleteTopicHandler {
    async fn execute(&self, command: DeleteTopicCommand) -> AppResult<DeleteTopicResult> {
        command.validate().into_result()?;

        let Some(topic) = self.topic_repository.find_by_id(command.id).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                command.id
            )));
        };
        let subject_id = topic.subject_id();

        let Some(mut subject) = self.subject_repository.find_by_id(subject_id).await? else {
            return Err(AppError::NotFound(format!(
                "Subject with id {} not found",
                subject_id
            )));
        };

        subject.remove_topic(command.id)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut subject]);

        rollback_on_error(
            self.unit_of_work.as_ref(),
            self.topic_repository.delete(command.id).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(DeleteTopicResult::new(command.id, subject_id))
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
    async fn removal_publishes_topic_removed_event() {
        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));
        topics.expect_delete().returning(|_| Ok(()));

        let mut subjects = MockSubjectRepo::new();
        subjects.expect_find_by_id().returning(|id| {
            let loaded = vec![fixtures::topic(4, id, "Algebra", Vec::new())];
            Ok(Some(fixtures::subject(id, "Math", loaded)))
        });

        let publisher = Arc::new(CollectingEventPublisher::default());
        let handler = DeleteTopicHandler::new(
            Arc::new(subjects),
            Arc::new(topics),
            Arc::new(FakeUnitOfWork::default()),
            publisher.clone(),
        );

        let result = handler.execute(DeleteTopicCommand::new(4)).await.unwrap();
        assert_eq!(result.subject_id, 1);
        assert_eq!(publisher.event_types(), vec!["TopicRemovedFromSubject"]);
    }

    #[tokio::test]
    async fn topic_missing_from_loaded_subject_reports_not_found() {
        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));
        topics.expect_delete().never();

        let mut subjects = MockSubjectRepo::new();
        // Subject loads with an empty topic collection.
        subjects
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::subject(id, "Math", Vec::new()))));

        let handler = DeleteTopicHandler::new(
            Arc::new(subjects),
            Arc::new(topics),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler.execute(DeleteTopicCommand::new(4)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
