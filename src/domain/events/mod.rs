mod content_events;

pub use content_events::*;
