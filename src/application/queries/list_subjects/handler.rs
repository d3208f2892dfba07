use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_subject_response;
use crate::application::dto::SubjectResponse;
use crate::domain::repositories::{Repository, SubjectRepository};
use crate::shared::{
    application::pagination::PaginatedResult, application::use_case::Query, errors::AppResult,
};

use super::query::ListSubjectsQuery;

/// Query handler for listing subjects
pub struct ListSubjectsHandler {
    subject_repository: Arc<dyn SubjectRepository>,
}

impl ListSubjectsHandler {
    pub fn new(subject_repository: Arc<dyn SubjectRepository>) -> Self {
        Self { subject_repository }
    }
}

#[async_trait]
impl Query<ListSubjectsQuery, PaginatedResult<SubjectResponse>> for ListSubjectsHandler {
    async fn execute(
        &self,
        query: ListSubjectsQuery,
    ) -> AppResult<PaginatedResult<SubjectResponse>> {
        let page = self.subject_repository.find_page(query.pagination).await?;
        Ok(page.map(|subject| to_subject_response(&subject)))
    }
}
