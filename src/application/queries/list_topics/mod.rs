mod handler;
mod query;

pub use handler::ListTopicsHandler;
pub use query::ListTopicsQuery;
