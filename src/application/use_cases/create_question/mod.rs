mod command;
mod handler;

pub use command::{CreateQuestionCommand, NewQuestionOption};
pub use handler::CreateQuestionHandler;
