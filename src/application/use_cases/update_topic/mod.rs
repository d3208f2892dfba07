mod command;
mod handler;

pub use command::UpdateTopicCommand;
pub use handler::UpdateTopicHandler;
