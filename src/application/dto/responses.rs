use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResponse {
    pub id: i32,
    pub name: String,
    pub topic_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: i32,
    pub subject_id: i32,
    pub name: String,
    pub question_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question projection with the parent topic name flattened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: i32,
    pub topic_id: i32,
    pub topic_name: String,
    pub question_text: String,
    pub difficulty_level: i32,
    pub max_score: i32,
    pub generated_by: String,
    pub source_reference: Option<String>,
    pub options: Vec<OptionResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResponse {
    pub id: i32,
    pub question_id: i32,
    pub option_text: String,
    pub is_correct: bool,
}
