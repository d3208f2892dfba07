use async_trait::async_trait;
use futures::future;
use std::sync::Arc;

use crate::application::dto::mappers::to_question_response;
use crate::application::dto::QuestionResponse;
use crate::domain::repositories::{QuestionRepository, Repository, TopicRepository};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::ListQuestionsQuery;

/// Query handler for listing a topic's questions with their options
pub struct ListQuestionsHandler {
    topic_repository: Arc<dyn TopicRepository>,
    question_repository: Arc<dyn QuestionRepository>,
}

impl ListQuestionsHandler {
    pub fn new(
        topic_repository: Arc<dyn TopicRepository>,
        question_repository: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            topic_repository,
            question_repository,
        }
    }
}

#[async_trait]
impl Query<ListQuestionsQuery, Vec<QuestionResponse>> for ListQuestionsHandler {
    async fn execute(&self, query: ListQuestionsQuery) -> AppResult<Vec<QuestionResponse>> {
        // The topic (for its name) and the question list are independent
        // reads.
        let (topic, questions) = future::try_join(
            self.topic_repository.find_by_id(query.topic_id),
            self.question_repository.find_by_topic(query.topic_id),
        )
        .await?;

        let Some(topic) = topic else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                query.topic_id
            )));
        };

        Ok(questions
            .iter()
            .map(|q| to_question_response(q, topic.name().as_str()))
            .collect())
    }
}
