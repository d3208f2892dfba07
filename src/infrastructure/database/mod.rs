pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod session;
pub mod unit_of_work;

pub use connection::Database;
pub use session::DbSession;
pub use unit_of_work::PgUnitOfWork;
