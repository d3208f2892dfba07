use async_trait::async_trait;

use crate::application::ports::EventPublisher;
use crate::domain::events::DomainEvent;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

/// Default publisher: writes each drained event to the log.
///
/// No consumer is wired today; swap this for an outbox or in-process bus
/// behind the same port when one exists.
#[derive(Default)]
pub struct LoggingEventPublisher;

impl LoggingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> AppResult<()> {
        LogContext::domain_event(
            event.event_type(),
            &format!("id={} at={}", event.event_id(), event.occurred_at()),
        );
        Ok(())
    }

    async fn publish_all(&self, events: Vec<Box<dyn DomainEvent>>) -> AppResult<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::SubjectCreatedEvent;

    #[tokio::test]
    async fn publish_all_accepts_empty_and_populated_batches() {
        let publisher = LoggingEventPublisher::new();
        publisher.publish_all(Vec::new()).await.unwrap();

        let event = SubjectCreatedEvent::new(1, "Math".to_string());
        publisher.publish_all(vec![Box::new(event)]).await.unwrap();
    }
}
