mod command;
mod handler;
mod result;

pub use command::DeleteQuestionCommand;
pub use handler::DeleteQuestionHandler;
pub use result::DeleteQuestionResult;
