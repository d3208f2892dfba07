use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_question_response;
use crate::application::dto::QuestionResponse;
use crate::domain::repositories::{QuestionRepository, Repository, TopicRepository};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetQuestionQuery;

/// Query handler for fetching a question by id, with the parent topic
/// name flattened into the response
pub struct GetQuestionHandler {
    question_repository: Arc<dyn QuestionRepository>,
    topic_repository: Arc<dyn TopicRepository>,
}

impl GetQuestionHandler {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        topic_repository: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            question_repository,
            topic_repository,
        }
    }
}

#[async_trait]
impl Query<GetQuestionQuery, QuestionResponse> for GetQuestionHandler {
    async fn execute(&self, query: GetQuestionQuery) -> AppResult<QuestionResponse> {
        let Some(question) = self.question_repository.find_by_id(query.id).await? else {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                query.id
            )));
        };

        let Some(topic) = self.topic_repository.find_by_id(question.topic_id()).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                question.topic_id()
            )));
        };

        Ok(to_question_response(&question, topic.name().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::fixtures;
    use crate::application::testing::{MockQuestionRepo, MockTopicRepo};

    #[tokio::test]
    async fn missing_question_reports_not_found() {
        let mut questions = MockQuestionRepo::new();
        questions.expect_find_by_id().returning(|_| Ok(None));

        let handler =
            GetQuestionHandler::new(Arc::new(questions), Arc::new(MockTopicRepo::new()));
        let err = handler.execute(GetQuestionQuery::new(9)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn response_includes_options_and_topic_name() {
        let mut questions = MockQuestionRepo::new();
        questions.expect_find_by_id().returning(|id| {
            let options = vec![fixtures::option(11, id, "4", true)];
            Ok(Some(fixtures::question(id, 3, "What is 2+2=?", options)))
        });
        let mut topics = MockTopicRepo::new();
        topics
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::topic(id, 1, "Algebra", Vec::new()))));

        let handler = GetQuestionHandler::new(Arc::new(questions), Arc::new(topics));
        let response = handler.execute(GetQuestionQuery::new(9)).await.unwrap();
        assert_eq!(response.topic_name, "Algebra");
        assert_eq!(response.options.len(), 1);
    }
}
