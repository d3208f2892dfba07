use crate::domain::entities::{AggregateRoot, AuditInfo, QuestionOption};
use crate::domain::value_objects::OptionText;
use crate::infrastructure::database::models::QuestionModel;
use crate::infrastructure::database::schema::question_options;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// For reading with associations
#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(QuestionModel, foreign_key = question_id))]
#[diesel(table_name = question_options)]
pub struct QuestionOptionModel {
    pub id: i32,
    pub question_id: i32,
    pub option_text: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl QuestionOptionModel {
    pub fn into_entity(self) -> AppResult<QuestionOption> {
        let text = OptionText::new(self.option_text)
            .map_err(|e| AppError::Internal(format!("Corrupt option row {}: {}", self.id, e)))?;
        Ok(QuestionOption::hydrate(
            self.id,
            self.question_id,
            text,
            self.is_correct,
            AuditInfo {
                created_at: self.created_at,
                created_by: self.created_by,
                updated_at: self.updated_at,
                updated_by: self.updated_by,
            },
        ))
    }
}

// For inserting new options
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = question_options)]
pub struct NewQuestionOptionRow {
    pub question_id: i32,
    pub option_text: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl NewQuestionOptionRow {
    pub fn from_entity(option: &QuestionOption) -> Self {
        let audit = option.audit();
        Self {
            question_id: option.question_id(),
            option_text: option.text().as_str().to_string(),
            is_correct: option.is_correct(),
            created_at: audit.created_at,
            created_by: audit.created_by.clone(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}

// For updating existing options
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = question_options)]
pub struct QuestionOptionChangeset {
    pub option_text: String,
    pub is_correct: bool,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl QuestionOptionChangeset {
    pub fn from_entity(option: &QuestionOption) -> Self {
        let audit = option.audit();
        Self {
            option_text: option.text().as_str().to_string(),
            is_correct: option.is_correct(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}
