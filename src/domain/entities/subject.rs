use crate::domain::entities::{AggregateRoot, AuditInfo, Topic};
use crate::domain::events::{
    DomainEvent, SubjectCreatedEvent, SubjectUpdatedEvent, TopicAddedToSubjectEvent,
    TopicRemovedFromSubjectEvent,
};
use crate::domain::value_objects::SubjectName;
use crate::shared::errors::{AppError, AppResult};

/// Subject aggregate root, the top of the content hierarchy.
///
/// Topic names are unique within a subject, compared case-insensitively
/// against the loaded topic collection; the store-level unique index is
/// the authoritative backstop under concurrent writers.
#[derive(Debug)]
pub struct Subject {
    id: i32,
    name: SubjectName,
    topics: Vec<Topic>,
    audit: AuditInfo,
    pending_events: Vec<Box<dyn DomainEvent>>,
}

impl Subject {
    pub fn new(name: &str) -> AppResult<Self> {
        let name = SubjectName::new(name)?;
        let event = SubjectCreatedEvent::new(0, name.as_str().to_string());

        Ok(Self {
            id: 0,
            name,
            topics: Vec::new(),
            audit: AuditInfo::new(),
            pending_events: vec![Box::new(event)],
        })
    }

    /// Rebuild from persistence without queueing events.
    pub fn hydrate(id: i32, name: SubjectName, topics: Vec<Topic>, audit: AuditInfo) -> Self {
        Self {
            id,
            name,
            topics,
            audit,
            pending_events: Vec::new(),
        }
    }

    pub fn name(&self) -> &SubjectName {
        &self.name
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Mutable access to a loaded topic by name, case-insensitive.
    pub fn topic_mut(&mut self, name: &str) -> Option<&mut Topic> {
        self.topics.iter_mut().find(|t| t.name().matches(name))
    }

    /// Rename, revalidating the new name.
    pub fn rename(&mut self, name: &str) -> AppResult<()> {
        self.name = SubjectName::new(name)?;
        self.pending_events
            .push(Box::new(SubjectUpdatedEvent::new(
                self.id,
                self.name.as_str().to_string(),
            )));
        Ok(())
    }

    /// Factory for a topic under this subject. Fails with `Duplicate` when
    /// the name collides with an already-loaded topic.
    pub fn add_topic(&mut self, name: &str) -> AppResult<&Topic> {
        if self.topics.iter().any(|t| t.name().matches(name)) {
            return Err(AppError::Duplicate(format!(
                "Topic '{}' already exists in subject '{}'",
                name, self.name
            )));
        }

        let topic = Topic::new(self.id, name)?;
        self.topics.push(topic);

        self.pending_events
            .push(Box::new(TopicAddedToSubjectEvent::new(
                self.id,
                name.to_string(),
            )));

        let index = self.topics.len() - 1;
        Ok(&self.topics[index])
    }

    /// Remove a topic; fails if it is not in the loaded collection.
    pub fn remove_topic(&mut self, topic_id: i32) -> AppResult<Topic> {
        let index = self
            .topics
            .iter()
            .position(|t| t.id() == topic_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Topic with id {} not loaded on subject '{}'",
                    topic_id, self.name
                ))
            })?;
        let removed = self.topics.remove(index);

        self.pending_events
            .push(Box::new(TopicRemovedFromSubjectEvent::new(
                self.id, topic_id,
            )));

        Ok(removed)
    }

    pub fn pending_events(&self) -> &[Box<dyn DomainEvent>] {
        &self.pending_events
    }

    pub fn clear_events(&mut self) {
        self.pending_events.clear();
    }
}

impl AggregateRoot for Subject {
    fn id(&self) -> i32 {
        self.id
    }

    fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit
    }

    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>> {
        std::mem::take(&mut self.pending_events)
    }

    fn children_mut(&mut self) -> Vec<&mut dyn AggregateRoot> {
        self.topics
            .iter_mut()
            .map(|t| t as &mut dyn AggregateRoot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_subject_queues_created_event() {
        let subject = Subject::new("Math").unwrap();
        assert_eq!(subject.pending_events().len(), 1);
        assert_eq!(subject.pending_events()[0].event_type(), "SubjectCreated");
    }

    #[test]
    fn add_topic_rejects_case_insensitive_duplicate() {
        let mut subject = Subject::new("Math").unwrap();
        subject.add_topic("Algebra").unwrap();

        let err = subject.add_topic("algebra").unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
        assert_eq!(subject.topics().len(), 1);
    }

    #[test]
    fn add_topic_returns_new_child() {
        let mut subject = Subject::new("Math").unwrap();
        let topic = subject.add_topic("Algebra").unwrap();
        assert_eq!(topic.name().as_str(), "Algebra");
        assert_eq!(topic.subject_id(), subject.id());
    }

    #[test]
    fn remove_topic_not_loaded_fails() {
        let mut subject = Subject::new("Math").unwrap();
        assert!(matches!(
            subject.remove_topic(3),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn remove_topic_queues_event() {
        let mut subject = Subject::new("Math").unwrap();
        subject.add_topic("Algebra").unwrap();
        subject.clear_events();

        // Loaded topics carry id 0 until persisted; remove by that id.
        subject.remove_topic(0).unwrap();
        assert_eq!(subject.pending_events().len(), 1);
        assert_eq!(
            subject.pending_events()[0].event_type(),
            "TopicRemovedFromSubject"
        );
        assert!(subject.topics().is_empty());
    }

    #[test]
    fn rename_queues_updated_event() {
        let mut subject = Subject::new("Math").unwrap();
        subject.clear_events();
        subject.rename("Applied Math").unwrap();
        assert_eq!(subject.name().as_str(), "Applied Math");
        assert_eq!(subject.pending_events()[0].event_type(), "SubjectUpdated");
    }
}
