mod command;
mod handler;

pub use command::UpdateQuestionCommand;
pub use handler::UpdateQuestionHandler;
