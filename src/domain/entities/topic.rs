use crate::domain::entities::{AggregateRoot, AuditInfo, Question};
use crate::domain::events::{
    DomainEvent, QuestionAddedToTopicEvent, QuestionRemovedFromTopicEvent, TopicUpdatedEvent,
};
use crate::domain::value_objects::{GeneratedBy, TopicName};
use crate::shared::errors::{AppError, AppResult};

/// Topic aggregate root. Owns its questions; question text is unique
/// within a topic, compared case-insensitively against loaded questions.
#[derive(Debug)]
pub struct Topic {
    id: i32,
    subject_id: i32,
    name: TopicName,
    questions: Vec<Question>,
    audit: AuditInfo,
    pending_events: Vec<Box<dyn DomainEvent>>,
}

impl Topic {
    /// Validating constructor. The "topic added" event is queued by the
    /// owning subject's factory.
    pub fn new(subject_id: i32, name: &str) -> AppResult<Self> {
        Ok(Self {
            id: 0,
            subject_id,
            name: TopicName::new(name)?,
            questions: Vec::new(),
            audit: AuditInfo::new(),
            pending_events: Vec::new(),
        })
    }

    /// Rebuild from persistence without queueing events.
    pub fn hydrate(
        id: i32,
        subject_id: i32,
        name: TopicName,
        questions: Vec<Question>,
        audit: AuditInfo,
    ) -> Self {
        Self {
            id,
            subject_id,
            name,
            questions,
            audit,
            pending_events: Vec::new(),
        }
    }

    pub fn subject_id(&self) -> i32 {
        self.subject_id
    }

    pub fn name(&self) -> &TopicName {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Mutable access to a loaded question by its text, case-insensitive.
    /// Used after `add_question` to attach options before persistence.
    pub fn question_mut(&mut self, text: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.text().matches(text))
    }

    /// Rename, revalidating the new name.
    pub fn rename(&mut self, name: &str) -> AppResult<()> {
        self.name = TopicName::new(name)?;
        self.pending_events
            .push(Box::new(TopicUpdatedEvent::new(
                self.id,
                self.name.as_str().to_string(),
            )));
        Ok(())
    }

    /// Factory for a question under this topic. Fails with `Duplicate`
    /// when the text collides with an already-loaded question.
    pub fn add_question(
        &mut self,
        text: &str,
        difficulty: i32,
        max_score: i32,
        generated_by: GeneratedBy,
        source_reference: Option<&str>,
    ) -> AppResult<&Question> {
        if self.questions.iter().any(|q| q.text().matches(text)) {
            return Err(AppError::Duplicate(format!(
                "Question '{}' already exists in topic '{}'",
                text, self.name
            )));
        }

        let question = Question::new(
            self.id,
            text,
            difficulty,
            max_score,
            generated_by,
            source_reference,
        )?;
        self.questions.push(question);

        self.pending_events
            .push(Box::new(QuestionAddedToTopicEvent::new(
                self.id,
                text.to_string(),
            )));

        let index = self.questions.len() - 1;
        Ok(&self.questions[index])
    }

    /// Remove a question; fails if it is not in the loaded collection.
    pub fn remove_question(&mut self, question_id: i32) -> AppResult<Question> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == question_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Question with id {} not loaded on topic '{}'",
                    question_id, self.name
                ))
            })?;
        let removed = self.questions.remove(index);

        self.pending_events
            .push(Box::new(QuestionRemovedFromTopicEvent::new(
                self.id,
                question_id,
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

impl AggregateRoot for Topic {
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
        self.questions
            .iter_mut()
            .map(|q| q as &mut dyn AggregateRoot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_question_rejects_case_insensitive_duplicate() {
        let mut topic = Topic::new(1, "Algebra").unwrap();
        topic
            .add_question("What is X?", 1, 1, GeneratedBy::Manual, None)
            .unwrap();

        let err = topic
            .add_question("what is x?", 2, 2, GeneratedBy::Manual, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
        assert_eq!(topic.questions().len(), 1);
    }

    #[test]
    fn add_question_queues_event() {
        let mut topic = Topic::new(1, "Algebra").unwrap();
        topic
            .add_question("What is X?", 1, 1, GeneratedBy::Ai, None)
            .unwrap();
        assert_eq!(topic.pending_events().len(), 1);
        assert_eq!(topic.pending_events()[0].event_type(), "QuestionAddedToTopic");
    }

    #[test]
    fn remove_question_not_loaded_fails() {
        let mut topic = Topic::new(1, "Algebra").unwrap();
        assert!(matches!(
            topic.remove_question(9),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn rename_revalidates_and_queues_event() {
        let mut topic = Topic::new(1, "Algebra").unwrap();
        assert!(topic.rename("Algebra & More").is_err());
        topic.rename("Linear Algebra").unwrap();
        assert_eq!(topic.name().as_str(), "Linear Algebra");
        assert_eq!(topic.pending_events().len(), 1);
    }
}
