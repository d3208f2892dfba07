use async_trait::async_trait;
use std::sync::Arc;

use crate::application::dto::mappers::to_topic_response;
use crate::application::dto::TopicResponse;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::application::use_cases::rollback_on_error;
use crate::domain::repositories::{Repository, TopicRepository};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::ValidateRequest,
};

use super::command::UpdateTopicCommand;

/// Use case handler for renaming a topic
pub struct UpdateTopicHandler {
    topic_repository: Arc<dyn TopicRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateTopicHandler {
    pub fn new(
        topic_repository: Arc<dyn TopicRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            topic_repository,
            unit_of_work,
            event_publisher,
        }
    }
}

#[async_trait]
impl UseCase<UpdateTopicCommand, TopicResponse> for UpdateTopicHandler {
    async fn execute(&self, command: UpdateTopicCommand) -> AppResult<TopicResponse> {
        command.validate().into_result()?;

        let Some(mut topic) = self.topic_repository.find_by_id(command.id).await? else {
            return Err(AppError::NotFound(format!(
                "Topic with id {} not found",
                command.id
            )));
        };

        if self
            .topic_repository
            .exists_by_name_and_subject(&command.name, topic.subject_id(), Some(command.id))
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Topic '{}' already exists in subject {}",
                command.name,
                topic.subject_id()
            )));
        }

        topic.rename(&command.name)?;

        self.unit_of_work.begin_transaction().await?;
        let events = self.unit_of_work.save_changes(&mut [&mut topic]);

        let saved = rollback_on_error(
            self.unit_of_work.as_ref(),
            self.topic_repository.update(&topic).await,
        )
        .await?;
        self.unit_of_work.commit_transaction().await?;

        self.event_publisher.publish_all(events).await?;

        Ok(to_topic_response(&saved))
    }
}
