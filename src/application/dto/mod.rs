pub mod mappers;
pub mod responses;

pub use responses::{OptionResponse, QuestionResponse, SubjectResponse, TopicResponse};
