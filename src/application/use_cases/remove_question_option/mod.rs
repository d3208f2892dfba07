mod command;
mod handler;
mod result;

pub use command::RemoveQuestionOptionCommand;
pub use handler::RemoveQuestionOptionHandler;
pub use result::RemoveQuestionOptionResult;
