pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use shared::errors::{AppError, AppResult};

/// One-time process setup: environment variables and logging.
pub fn init() {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();
}
