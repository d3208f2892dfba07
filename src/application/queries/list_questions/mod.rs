mod handler;
mod query;

pub use handler::ListQuestionsHandler;
pub use query::ListQuestionsQuery;
