use crate::domain::entities::{AggregateRoot, AuditInfo, Question, Topic};
use crate::domain::value_objects::TopicName;
use crate::infrastructure::database::models::SubjectModel;
use crate::infrastructure::database::schema::topics;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// For reading with associations
#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(SubjectModel, foreign_key = subject_id))]
#[diesel(table_name = topics)]
pub struct TopicModel {
    pub id: i32,
    pub subject_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl TopicModel {
    pub fn into_entity(self, questions: Vec<Question>) -> AppResult<Topic> {
        let name = TopicName::new(self.name)
            .map_err(|e| AppError::Internal(format!("Corrupt topic row {}: {}", self.id, e)))?;
        Ok(Topic::hydrate(
            self.id,
            self.subject_id,
            name,
            questions,
            AuditInfo {
                created_at: self.created_at,
                created_by: self.created_by,
                updated_at: self.updated_at,
                updated_by: self.updated_by,
            },
        ))
    }
}

// For inserting new topics
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = topics)]
pub struct NewTopic {
    pub subject_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl NewTopic {
    pub fn from_entity(topic: &Topic) -> Self {
        let audit = topic.audit();
        Self {
            subject_id: topic.subject_id(),
            name: topic.name().as_str().to_string(),
            created_at: audit.created_at,
            created_by: audit.created_by.clone(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}

// For updating existing topics
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = topics)]
pub struct TopicChangeset {
    pub name: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl TopicChangeset {
    pub fn from_entity(topic: &Topic) -> Self {
        let audit = topic.audit();
        Self {
            name: topic.name().as_str().to_string(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}
