use crate::domain::entities::{AggregateRoot, AuditInfo, Subject, Topic};
use crate::domain::value_objects::SubjectName;
use crate::infrastructure::database::schema::subjects;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// For reading from database - with associations support
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct SubjectModel {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl SubjectModel {
    /// Hydrate the aggregate; the stored name is trusted but still parsed
    /// so a corrupt row cannot smuggle an invalid value into the domain.
    pub fn into_entity(self, topics: Vec<Topic>) -> AppResult<Subject> {
        let name = SubjectName::new(self.name)
            .map_err(|e| AppError::Internal(format!("Corrupt subject row {}: {}", self.id, e)))?;
        Ok(Subject::hydrate(
            self.id,
            name,
            topics,
            AuditInfo {
                created_at: self.created_at,
                created_by: self.created_by,
                updated_at: self.updated_at,
                updated_by: self.updated_by,
            },
        ))
    }
}

// For inserting new subjects
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct NewSubject {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl NewSubject {
    pub fn from_entity(subject: &Subject) -> Self {
        let audit = subject.audit();
        Self {
            name: subject.name().as_str().to_string(),
            created_at: audit.created_at,
            created_by: audit.created_by.clone(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}

// For updating existing subjects (excludes id and creation audit)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct SubjectChangeset {
    pub name: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl SubjectChangeset {
    pub fn from_entity(subject: &Subject) -> Self {
        let audit = subject.audit();
        Self {
            name: subject.name().as_str().to_string(),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.clone(),
        }
    }
}
