mod handler;
mod query;

pub use handler::GetSubjectHandler;
pub use query::GetSubjectQuery;
