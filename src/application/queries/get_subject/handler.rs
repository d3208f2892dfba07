use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_subject_response;
use crate::application::dto::SubjectResponse;
use crate::domain::repositories::{Repository, SubjectRepository};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetSubjectQuery;

/// Query handler for fetching a subject by id
pub struct GetSubjectHandler {
    subject_repository: Arc<dyn SubjectRepository>,
}

impl GetSubjectHandler {
    pub fn new(subject_repository: Arc<dyn SubjectRepository>) -> Self {
        Self { subject_repository }
    }
}

#[async_trait]
impl Query<GetSubjectQuery, SubjectResponse> for GetSubjectHandler {
    async fn execute(&self, query: GetSubjectQuery) -> AppResult<SubjectResponse> {
        let Some(subject) = self.subject_repository.find_by_id(query.id).await? else {
            return Err(AppError::NotFound(format!(
                "Subject with id {} not found",
                query.id
            )));
        };

        Ok(to_subject_response(&subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixtures;
    use crate::application::testing::MockSubjectRepo;

    #[tokio::test]
    async fn missing_subject_reports_not_found() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let handler = GetSubjectHandler::new(Arc::new(repo));
        let err = handler.execute(GetSubjectQuery::new(9)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn maps_loaded_topic_count() {
        let mut repo = MockSubjectRepo::new();
        repo.expect_find_by_id().returning(|id| {
            let topics = vec![fixtures::topic(2, id, "Algebra", Vec::new())];
            Ok(Some(fixtures::subject(id, "Math", topics)))
        });

        let handler = GetSubjectHandler::new(Arc::new(repo));
        let response = handler.execute(GetSubjectQuery::new(1)).await.unwrap();
        assert_eq!(response.topic_count, 1);
    }
}
