use crate::domain::entities::{AggregateRoot, AuditInfo, Question, QuestionOption};
use crate::domain::value_objects::{
    DifficultyLevel, GeneratedBy, MaxScore, QuestionText, SourceReference,
};
use crate::infrastructure::database::models::TopicModel;
use crate::infrastructure::database::schema::questions;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// For reading with associations
#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(TopicModel, foreign_key = topic_id))]
#[diesel(table_name = questions)]
pub struct QuestionModel {
    pub id: i32,
    pub topic_id: i32,
    pub question_text: String,
    pub difficulty_level: i32,
    pub max_score: i32,
    pub generated_by: GeneratedBy,
    pub source_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl QuestionModel {
    pub fn into_entity(self, options: Vec<QuestionOption>) -> AppResult<Question> {
        let id = self.id;
        let corrupt =
            move |e: AppError| AppError::Internal(format!("Corrupt question row {}: {}", id, e));

        let text = QuestionText::new(self.question_text).map_err(corrupt)?;
        let difficulty = DifficultyLevel::new(self.difficulty_level).map_err(corrupt)?;
        let max_score = MaxScore::new(self.max_score).map_err(corrupt)?;
        let source = self
            .source_reference
            .map(SourceReference::new)
            .transpose()
            .map_err(corrupt)?;

        Ok(Question::hydrate(
            self.id,
            self.topic_id,
            text,
            difficulty,
            max_score,
            self.generated_by,
            source,
            options,
            AuditInfo {
                created_at: self.created_at,
                created_by: self.created_by,
                updated_at: self.updated_at,
                updated_by: self.updated_by,
            },
        ))
    }
}

// For inserting new questions
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub topic_id: i32,
    pub question_text: String,
    pub difficulty_level: i32,
    pub max_score: i32,
    pub generated_by: GeneratedBy,
    pub source_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl NewQuestion {
    pub fn from_entity(question: &Question) -> Self {
        let audit = question.audit();
        Self {
            topic_id: question.topic_id(),
            question_text: question.text().as_str().to_string(),
            difficulty_level: question.difficulty().value(),
            max_score: question.max_score().value(),
            generated_by: question.generated_by(),
            source_reference: question
                .source_reference()
                .map(|s| s.as_str().to_string()),
            created_at: audit.created_at,
            created_by: audit.created_by.clone(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}

// For updating existing questions
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = questions)]
pub struct QuestionChangeset {
    pub question_text: String,
    pub difficulty_level: i32,
    pub max_score: i32,
    pub generated_by: GeneratedBy,
    pub source_reference: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl QuestionChangeset {
    pub fn from_entity(question: &Question) -> Self {
        let audit = question.audit();
        Self {
            question_text: question.text().as_str().to_string(),
            difficulty_level: question.difficulty().value(),
            max_score: question.max_score().value(),
            generated_by: question.generated_by(),
            // Double Option so clearing the reference writes NULL instead
            // of skipping the column.
            source_reference: Some(
                question.source_reference().map(|s| s.as_str().to_string()),
            ),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}
