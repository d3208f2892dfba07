mod command;
mod handler;
mod result;

pub use command::DeleteSubjectCommand;
pub use handler::DeleteSubjectHandler;
pub use result::DeleteSubjectResult;
