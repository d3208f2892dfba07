mod command;
mod handler;
mod result;

pub use command::DeleteTopicCommand;
pub use handler::DeleteTopicHandler;
pub use result::DeleteTopicResult;
