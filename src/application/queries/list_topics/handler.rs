use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_topic_response;
use crate::application::dto::TopicResponse;
use crate::domain::repositories::{Repository, SubjectRepository, TopicRepository};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::ListTopicsQuery;

/// Query handler for listing the topics of a subject
pub struct ListTopicsHandler {
    subject_repository: Arc<dyn SubjectRepository>,
    topic_repository: Arc<dyn TopicRepository>,
}

impl ListTopicsHandler {
    pub fn new(
        subject_repository: Arc<dyn SubjectRepository>,
        topic_repository: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            subject_repository,
            topic_repository,
        }
    }
}

#[async_trait]
impl Query<ListTopicsQuery, Vec<TopicResponse>> for ListTopicsHandler {
    async fn execute(&self, query: ListTopicsQuery) -> AppResult<Vec<TopicResponse>> {
        if !self.subject_repository.exists(query.subject_id).await? {
            return Err(AppError::NotFound(format!(
                "Subject with id {} not found",
                query.subject_id
            )));
        }

        let topics = self.topic_repository.find_by_subject(query.subject_id).await?;
        Ok(topics.iter().map(to_topic_response).collect())
    }
}
