use async_trait::async_trait;
use std::sync::Arc;

use crate::application::ports::UnitOfWork;
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{Repository, SubjectRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::{command::DeleteSubjectCommand, result::DeleteSubjectResult};

/// Use case handler for deleting a subject. The store cascades the delete
/// to topics, questions and options.
pub struct DeleteSubjectHandler {
    subject_repository: Arc<dyn SubjectRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl DeleteSubjectHandler {
    pub fn new(
        subject_repository: Arc<dyn SubjectRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            subject_repository,
            unit_of_work,
        }
    }
}

#[async_trait]
impl UseCase<DeleteSubjectCommand, DeleteSubjectResult> for DeleteSubjectHandler {
    async fn execute(&self, command: DeleteSubjectCommand) -> AppResult<DeleteSubjectResult> {
        command.validate().into_result()?;

        if !self.subject_repository.exists(command.id).await? {
            return Err(AppError::NotFound(format!(
                "Subject with id {} not found",
                command.id
            )));
        }

        self.unit_of_work.begin_transaction().await?;
        rollback_on_error(
            self.unit_of_work.as_ref(),
            self.subject_repository.delete(command.id).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        Ok(DeleteSubjectResult::new(command.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeUnitOfWork, MockSubjectRepo};

    #[tokio::test]
    async fn missing_subject_reports_not_found() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_delete().never();

        let handler =
            DeleteSubjectHandler::new(Arc::new(repo), Arc::new(FakeUnitOfWork::default()));

        let err = handler.execute(DeleteSubjectCommand::new(9)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_runs_inside_transaction() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_exists().returning(|_| Ok(true));
        repo.expect_delete().returning(|_| Ok(()));

        let uow = Arc::new(FakeUnitOfWork::default());
        let handler = DeleteSubjectHandler::new(Arc::new(repo), uow.clone());

        let result = handler.execute(DeleteSubjectCommand::new(1)).await.unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(uow.begun.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(uow.committed.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
