mod handler;
mod query;

pub use handler::GetQuestionHandler;
pub use query::GetQuestionQuery;
