// Shared kernel used by every layer.

pub mod application;
pub mod errors;
pub mod infrastructure;
pub mod utils;
pub mod validation;

pub use errors::{AppError, AppResult};
pub use infrastructure::database_state::DatabaseState;
