mod command;
mod handler;

pub use command::CreateTopicCommand;
pub use handler::CreateTopicHandler;
