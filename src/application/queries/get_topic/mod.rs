mod handler;
mod query;

pub use handler::GetTopicHandler;
pub use query::GetTopicQuery;
