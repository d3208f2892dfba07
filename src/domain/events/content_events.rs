/// Domain events for the content aggregates
///
/// These events represent business-meaningful state changes that have
/// occurred. They are queued on the aggregate that raised them and drained
/// by the unit of work after a successful commit; no in-process dispatcher
/// is wired, the publisher port is the extension hook.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base trait for all domain events
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Unique identifier for this event
    fn event_id(&self) -> Uuid;

    /// Type of event (for serialization/routing)
    fn event_type(&self) -> &'static str;
}

/// A subject was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectCreatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub subject_id: i32,
    pub name: String,
}

impl SubjectCreatedEvent {
    pub fn new(subject_id: i32, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            subject_id,
            name,
        }
    }
}

impl DomainEvent for SubjectCreatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "SubjectCreated"
    }
}

/// A subject was renamed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectUpdatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub subject_id: i32,
    pub name: String,
}

impl SubjectUpdatedEvent {
    pub fn new(subject_id: i32, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            subject_id,
            name,
        }
    }
}

impl DomainEvent for SubjectUpdatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "SubjectUpdated"
    }
}

/// A topic was added to a subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicAddedToSubjectEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub subject_id: i32,
    pub topic_name: String,
}

impl TopicAddedToSubjectEvent {
    pub fn new(subject_id: i32, topic_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            subject_id,
            topic_name,
        }
    }
}

impl DomainEvent for TopicAddedToSubjectEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "TopicAddedToSubject"
    }
}

/// A topic was removed from a subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRemovedFromSubjectEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub subject_id: i32,
    pub topic_id: i32,
}

impl TopicRemovedFromSubjectEvent {
    pub fn new(subject_id: i32, topic_id: i32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            subject_id,
            topic_id,
        }
    }
}

impl DomainEvent for TopicRemovedFromSubjectEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "TopicRemovedFromSubject"
    }
}

/// A topic was renamed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicUpdatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub topic_id: i32,
    pub name: String,
}

impl TopicUpdatedEvent {
    pub fn new(topic_id: i32, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            topic_id,
            name,
        }
    }
}

impl DomainEvent for TopicUpdatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "TopicUpdated"
    }
}

/// A question was added to a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAddedToTopicEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub topic_id: i32,
    pub question_text: String,
}

impl QuestionAddedToTopicEvent {
    pub fn new(topic_id: i32, question_text: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            topic_id,
            question_text,
        }
    }
}

impl DomainEvent for QuestionAddedToTopicEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "QuestionAddedToTopic"
    }
}

/// A question was removed from a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRemovedFromTopicEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub topic_id: i32,
    pub question_id: i32,
}

impl QuestionRemovedFromTopicEvent {
    pub fn new(topic_id: i32, question_id: i32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            topic_id,
            question_id,
        }
    }
}

impl DomainEvent for QuestionRemovedFromTopicEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "QuestionRemovedFromTopic"
    }
}

/// A question's content or grading attributes changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionUpdatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub question_id: i32,
    pub updated_fields: Vec<String>,
}

impl QuestionUpdatedEvent {
    pub fn new(question_id: i32, updated_fields: Vec<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            question_id,
            updated_fields,
        }
    }
}

impl DomainEvent for QuestionUpdatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "QuestionUpdated"
    }
}

/// An option was added to a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionAddedToQuestionEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub question_id: i32,
    pub is_correct: bool,
}

impl OptionAddedToQuestionEvent {
    pub fn new(question_id: i32, is_correct: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            question_id,
            is_correct,
        }
    }
}

impl DomainEvent for OptionAddedToQuestionEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "OptionAddedToQuestion"
    }
}

/// An option's text or correctness flag changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionUpdatedEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub question_id: i32,
    pub option_id: i32,
}

impl OptionUpdatedEvent {
    pub fn new(question_id: i32, option_id: i32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            question_id,
            option_id,
        }
    }
}

impl DomainEvent for OptionUpdatedEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "OptionUpdated"
    }
}

/// An option was removed from a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRemovedFromQuestionEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub question_id: i32,
    pub option_id: i32,
}

impl OptionRemovedFromQuestionEvent {
    pub fn new(question_id: i32, option_id: i32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            question_id,
            option_id,
        }
    }
}

impl DomainEvent for OptionRemovedFromQuestionEvent {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "OptionRemovedFromQuestion"
    }
}
