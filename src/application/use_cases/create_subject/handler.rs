use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_subject_response;
use crate::application::dto::SubjectResponse;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::entities::Subject;
use crate::domain::repositories::{Repository, SubjectRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::command::CreateSubjectCommand;

/// Use case handler for creating a new subject
pub struct CreateSubjectHandler {
    subject_repository: Arc<dyn SubjectRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateSubjectHandler {
    pub fn new(
        subject_repository: Arc<dyn SubjectRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            subject_repository,
            unit_of_work,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<CreateSubjectCommand, SubjectResponse> for CreateSubjectHandler {
    async fn execute(&self, command: CreateSubjectCommand) -> AppResult<SubjectResponse> {
        command.validate().into_result()?;

        // Store-level uniqueness; the in-memory check cannot see other
        // subjects.
        if self
            .subject_repository
            .exists_by_name(&command.name, None)
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Subject '{}' already exists",
                command.name
            )));
        }

        let mut subject = Subject::new(&command.name)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut subject]);

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.subject_repository.save(&subject).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(to_subject_response(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{CollectingEventPublisher, FakeUnitOfWork, MockSubjectRepo};
    use crate::application::testing::fixtures;

    #[tokio::test]
    async fn creates_subject_and_publishes_created_event() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_exists_by_name()
            .returning(|_, _| Ok(false));
        repo.expect_save()
            .returning(|_| Ok(fixtures::subject(1, "Math", Vec::new())));

        let uow = Arc::new(FakeUnitOfWork::default());
        let publisher = Arc::new(CollectingEventPublisher::default());
        let handler =
            CreateSubjectHandler::new(Arc::new(repo), uow.clone(), publisher.clone());

        let response = handler
            .execute(CreateSubjectCommand::new("Math"))
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Math");
        assert_eq!(publisher.event_types(), vec!["SubjectCreated"]);
        assert_eq!(uow.committed.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_before_any_write() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_exists_by_name().returning(|_, _| Ok(true));
        repo.expect_save().never();

        let uow = Arc::new(FakeUnitOfWork::default());
        let publisher = Arc::new(CollectingEventPublisher::default());
        let handler =
            CreateSubjectHandler::new(Arc::new(repo), uow.clone(), publisher.clone());

        let err = handler
            .execute(CreateSubjectCommand::new("Math"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Duplicate(_)));
        assert_eq!(uow.begun.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_shape_fails_fast() {
        let repo = MockSubjectRepo::new();
        let handler = CreateSubjectHandler::new(
            Arc::new(repo),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler.execute(CreateSubjectCommand::new("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
