//! Shared doubles for handler tests: mockall mocks for the repository
//! traits, a fake unit of work and a collecting event publisher.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::unit_of_work::stamp_and_drain;
use crate::application::ports::{EventPublisher, UnitOfWork};
use crate::domain::entities::{AggregateRoot, Question, QuestionOption, Subject, Topic};
use crate::domain::events::DomainEvent;
use crate::domain::repositories::{
    QuestionOptionRepository, QuestionRepository, Repository, SubjectRepository, TopicRepository,
};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

mock! {
    pub SubjectRepo {}

    #[async_trait]
    impl Repository<Subject> for SubjectRepo {
        async fn find_by_id(&self, id: i32) -> AppResult<Option<Subject>>;
        async fn find_all(&self) -> AppResult<Vec<Subject>>;
        async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Subject>>;
        async fn save(&self, entity: &Subject) -> AppResult<Subject>;
        async fn update(&self, entity: &Subject) -> AppResult<Subject>;
        async fn delete(&self, id: i32) -> AppResult<()>;
        async fn exists(&self, id: i32) -> AppResult<bool>;
    }

    #[async_trait]
    impl SubjectRepository for SubjectRepo {
        async fn find_by_name(&self, name: &str) -> AppResult<Option<Subject>>;
        async fn exists_by_name(&self, name: &str, exclude_id: Option<i32>) -> AppResult<bool>;
    }
}

mock! {
    pub TopicRepo {}

    #[async_trait]
    impl Repository<Topic> for TopicRepo {
        async fn find_by_id(&self, id: i32) -> AppResult<Option<Topic>>;
        async fn find_all(&self) -> AppResult<Vec<Topic>>;
        async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Topic>>;
        async fn save(&self, entity: &Topic) -> AppResult<Topic>;
        async fn update(&self, entity: &Topic) -> AppResult<Topic>;
        async fn delete(&self, id: i32) -> AppResult<()>;
        async fn exists(&self, id: i32) -> AppResult<bool>;
    }

    #[async_trait]
    impl TopicRepository for TopicRepo {
        async fn find_by_subject(&self, subject_id: i32) -> AppResult<Vec<Topic>>;
        async fn exists_by_name_and_subject(
            &self,
            name: &str,
            subject_id: i32,
            exclude_id: Option<i32>,
        ) -> AppResult<bool>;
    }
}

mock! {
    pub QuestionRepo {}

    #[async_trait]
    impl Repository<Question> for QuestionRepo {
        async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>>;
        async fn find_all(&self) -> AppResult<Vec<Question>>;
        async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<Question>>;
        async fn save(&self, entity: &Question) -> AppResult<Question>;
        async fn update(&self, entity: &Question) -> AppResult<Question>;
        async fn delete(&self, id: i32) -> AppResult<()>;
        async fn exists(&self, id: i32) -> AppResult<bool>;
    }

    #[async_trait]
    impl QuestionRepository for QuestionRepo {
        async fn find_by_topic(&self, topic_id: i32) -> AppResult<Vec<Question>>;
        async fn exists_by_text_and_topic(
            &self,
            text: &str,
            topic_id: i32,
            exclude_id: Option<i32>,
        ) -> AppResult<bool>;
    }
}

mock! {
    pub OptionRepo {}

    #[async_trait]
    impl Repository<QuestionOption> for OptionRepo {
        async fn find_by_id(&self, id: i32) -> AppResult<Option<QuestionOption>>;
        async fn find_all(&self) -> AppResult<Vec<QuestionOption>>;
        async fn find_page(&self, pagination: PaginationParams) -> AppResult<PaginatedResult<QuestionOption>>;
        async fn save(&self, entity: &QuestionOption) -> AppResult<QuestionOption>;
        async fn update(&self, entity: &QuestionOption) -> AppResult<QuestionOption>;
        async fn delete(&self, id: i32) -> AppResult<()>;
        async fn exists(&self, id: i32) -> AppResult<bool>;
    }

    #[async_trait]
    impl QuestionOptionRepository for OptionRepo {
        async fn find_by_question(&self, question_id: i32) -> AppResult<Vec<QuestionOption>>;
    }
}

/// Unit of work that stamps and drains like the real one but only counts
/// transaction calls.
#[derive(Default)]
pub struct FakeUnitOfWork {
    pub begun: AtomicUsize,
    pub committed: AtomicUsize,
    pub rolled_back: AtomicUsize,
}

#[async_trait]
impl UnitOfWork for FakeUnitOfWork {
    async fn begin_transaction(&self) -> AppResult<()> {
        self.begun.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn commit_transaction(&self) -> AppResult<()> {
        self.committed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback_transaction(&self) -> AppResult<()> {
        self.rolled_back.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn save_changes(&self, touched: &mut [&mut dyn AggregateRoot]) -> Vec<Box<dyn DomainEvent>> {
        stamp_and_drain(touched, "test", Utc::now())
    }
}

/// Hydrated fixtures with store-assigned ids.
pub mod fixtures {
    use crate::domain::entities::{AuditInfo, Question, QuestionOption, Subject, Topic};
    use crate::domain::value_objects::{
        DifficultyLevel, GeneratedBy, MaxScore, OptionText, QuestionText, SubjectName, TopicName,
    };

    pub fn subject(id: i32, name: &str, topics: Vec<Topic>) -> Subject {
        Subject::hydrate(id, SubjectName::new(name).unwrap(), topics, AuditInfo::new())
    }

    pub fn topic(id: i32, subject_id: i32, name: &str, questions: Vec<Question>) -> Topic {
        Topic::hydrate(
            id,
            subject_id,
            TopicName::new(name).unwrap(),
            questions,
            AuditInfo::new(),
        )
    }

    pub fn question(id: i32, topic_id: i32, text: &str, options: Vec<QuestionOption>) -> Question {
        Question::hydrate(
            id,
            topic_id,
            QuestionText::new(text).unwrap(),
            DifficultyLevel::new(1).unwrap(),
            MaxScore::new(1).unwrap(),
            GeneratedBy::Manual,
            None,
            options,
            AuditInfo::new(),
        )
    }

    pub fn option(id: i32, question_id: i32, text: &str, is_correct: bool) -> QuestionOption {
        QuestionOption::hydrate(
            id,
            question_id,
            OptionText::new(text).unwrap(),
            is_correct,
            AuditInfo::new(),
        )
    }
}

/// Publisher that records everything it is handed.
#[derive(Default)]
pub struct CollectingEventPublisher {
    events: Mutex<Vec<Box<dyn DomainEvent>>>,
}

impl CollectingEventPublisher {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type())
            .collect()
    }
}

#[async_trait]
impl EventPublisher for CollectingEventPublisher {
    async fn publish(&self, event: Box<dyn DomainEvent>) -> AppResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<Box<dyn DomainEvent>>) -> AppResult<()> {
        self.events.lock().unwrap().extend(events);
        Ok(())
    }
}
