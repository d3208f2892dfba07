use crate::infrastructure::database::connection::Database;
use crate::shared::errors::AppError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Represents the state of the database connection
/// This allows the application to gracefully handle database failures
/// without terminating the entire process
#[derive(Clone)]
pub enum DatabaseState {
    /// Database is available and ready for use
    Available(Arc<Database>),
    /// Database is unavailable with the reason for failure
    Unavailable {
        reason: String,
        last_attempt: Instant,
        retry_count: u32,
    },
    /// Database is being initialized or reconnected
    Initializing,
}

impl DatabaseState {
    /// Create a new database state by attempting to initialize the database
    pub fn initialize() -> Self {
        match Database::from_env() {
            Ok(db) => {
                log::info!("Database initialized successfully");
                DatabaseState::Available(Arc::new(db))
            }
            Err(e) => {
                log::error!("Database initialization failed: {}", e);
                DatabaseState::Unavailable {
                    reason: e.to_string(),
                    last_attempt: Instant::now(),
                    retry_count: 0,
                }
            }
        }
    }

    /// Check if the database is available
    pub fn is_available(&self) -> bool {
        matches!(self, DatabaseState::Available(_))
    }

    /// Get the database if available, otherwise return an error
    pub fn get_database(&self) -> Result<Arc<Database>, AppError> {
        match self {
            DatabaseState::Available(db) => Ok(Arc::clone(db)),
            DatabaseState::Unavailable { reason, .. } => Err(AppError::ServiceUnavailable(
                format!("Database unavailable: {}", reason),
            )),
            DatabaseState::Initializing => Err(AppError::ServiceUnavailable(
                "Database is initializing, please try again".to_string(),
            )),
        }
    }

    /// Attempt to reconnect if currently unavailable, with exponential backoff
    /// to avoid hammering a database that is down.
    pub fn try_reconnect(&mut self) -> bool {
        let (last_attempt, retry_count) = match self {
            DatabaseState::Available(_) => return true,
            DatabaseState::Initializing => return false,
            DatabaseState::Unavailable {
                last_attempt,
                retry_count,
                ..
            } => (*last_attempt, *retry_count),
        };

        let backoff = Duration::from_secs(2u64.saturating_pow(retry_count.min(6)));
        if last_attempt.elapsed() < backoff {
            return false;
        }

        match Database::from_env() {
            Ok(db) => {
                log::info!("Database reconnected after {} retries", retry_count);
                *self = DatabaseState::Available(Arc::new(db));
                true
            }
            Err(e) => {
                log::warn!("Database reconnect attempt {} failed: {}", retry_count + 1, e);
                *self = DatabaseState::Unavailable {
                    reason: e.to_string(),
                    last_attempt: Instant::now(),
                    retry_count: retry_count + 1,
                };
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_state_reports_service_unavailable() {
        let state = DatabaseState::Unavailable {
            reason: "connection refused".into(),
            last_attempt: Instant::now(),
            retry_count: 1,
        };
        let err = state.get_database().unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[test]
    fn reconnect_respects_backoff_window() {
        let mut state = DatabaseState::Unavailable {
            reason: "down".into(),
            last_attempt: Instant::now(),
            retry_count: 3,
        };
        // Inside the backoff window no attempt is made.
        assert!(!state.try_reconnect());
    }
}
