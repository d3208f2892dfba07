use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_subject_response;
use crate::application::dto::SubjectResponse;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{Repository, SubjectRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::command::UpdateSubjectCommand;

/// Use case handler for renaming a subject
pub struct UpdateSubjectHandler {
    subject_repository: Arc<dyn SubjectRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateSubjectHandler {
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
impl UseCase<UpdateSubjectCommand, SubjectResponse> for UpdateSubjectHandler {
    async fn execute(&self, command: UpdateSubjectCommand) -> AppResult<SubjectResponse> {
        command.validate().into_result()?;

        let Some(mut subject) = self.subject_repository.find_by_id(command.id).await? else {
            return Err(AppError::NotFound(format!(
                "Subject with id {} not found",
                command.id
            )));
        };

        // Ignore the subject being renamed when probing for collisions.
        if self
            .subject_repository
            .exists_by_name(&command.name, Some(command.id))
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Subject '{}' already exists",
                command.name
            )));
        }

        subject.rename(&command.name)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut subject]);

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.subject_repository.update(&subject).await,
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
    use crate::application::testing::fixtures;
    use crate::application::testing::{CollectingEventPublisher, FakeUnitOfWork, MockSubjectRepo};

    #[tokio::test]
    async fn rename_collision_with_other_subject_is_rejected() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::subject(id, "Math", Vec::new()))));
        repo.expect_exists_by_name()
            .withf(|name, exclude| name == "Physics" && *exclude == Some(1))
            .returning(|_, _| Ok(true));
        repo.expect_update().never();

        let handler = UpdateSubjectHandler::new(
            Arc::new(repo),
            Arc::new(FakeUnitOfWork::default()),
            Arc::new(CollectingEventPublisher::default()),
        );

        let err = handler
            .execute(UpdateSubjectCommand::new(1, "Physics"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
    }

    #[tokio::test]
    async fn rename_publishes_updated_event() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::subject(id, "Math", Vec::new()))));
        repo.expect_exists_by_name().returning(|_, _| Ok(false));
        repo.expect_update()
            .returning(|_| Ok(fixtures::subject(1, "Applied Math", Vec::new())));

        let publisher = Arc::new(CollectingEventPublisher::default());
        let handler = UpdateSubjectHandler::new(
            Arc::new(repo),
            Arc::new(FakeUnitOfWork::default()),
            publisher.clone(),
        );

        let response = handler
            .execute(UpdateSubjectCommand::new(1, "Applied Math"))
            .await
            .unwrap();
        assert_eq!(response.name, "Applied Math");
        assert_eq!(publisher.event_types(), vec!["SubjectUpdated"]);
    }
}
