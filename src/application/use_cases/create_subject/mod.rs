mod command;
mod handler;

pub use command::CreateSubjectCommand;
pub use handler::CreateSubjectHandler;
