pub mod event_publisher;
pub mod unit_of_work;

pub use event_publisher::EventPublisher;
pub use unit_of_work::UnitOfWork;
