pub mod get_question;
pub mod get_subject;
pub mod get_topic;
pub mod list_questions;
pub mod list_subjects;
pub mod list_topics;
