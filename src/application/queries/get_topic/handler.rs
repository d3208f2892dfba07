use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_topic_response;
use crate::application::dto::TopicResponse;
use crate::domain::repositories::{Repository, TopicRepository};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetTopicQuery;

/// Query handler for fetching a topic by id
pub struct GetTopicHandler {
    topic_repository: Arc<dyn TopicRepository>,
}

impl GetTopicHandler {
    pub fn new(topic_repository: Arc<dyn TopicRepository>) -> Self {
        Self { topic_repository }
    }
}

#[async_trait]
impl Query<GetTopicQuery, TopicResponse> for GetTopicHandler {
    async fn execute(&self, query: GetTopicQuery) -> AppResult<TopicResponse> {
        let Some(topic) = self.topic_repository.find_by_id(query.id).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                query.id
            )));
        };

        Ok(to_topic_response(&topic))
    }
}
