use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::unit_of_work::stamp_and_drain;
use crate::application::ports::UnitOfWork;
use crate::domain::entities::AggregateRoot;
use crate::domain::events::DomainEvent;
use crate::infrastructure::database::session::DbSession;
use crate::shared::errors::AppResult;

/// Actor precedence: explicit argument, then `QUIZBANK_AUDIT_ACTOR`, then
/// "system".
fn resolve_actor(explicit: Option<String>) -> String {
    explicit
        .or_else(|| env::var("QUIZBANK_AUDIT_ACTOR").ok())
        .unwrap_or_else(|| "system".to_string())
}

/// Postgres unit of work over a shared [`DbSession`].
///
/// Repositories constructed on the same session run inside the open
/// transaction, so a commit or rollback covers every write a handler made
/// through them.
pub struct PgUnitOfWork {
    session: Arc<DbSession>,
    actor: String,
}

impl PgUnitOfWork {
    pub fn new(session: Arc<DbSession>) -> Self {
        Self::with_actor(session, None)
    }

    pub fn with_actor(session: Arc<DbSession>, actor: Option<String>) -> Self {
        Self {
            session,
            actor: resolve_actor(actor),
        }
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn begin_transaction(&self) -> AppResult<()> {
        self.session.begin().await
    }

    async fn commit_transaction(&self) -> AppResult<()> {
        self.session.commit().await
    }

    async fn rollback_transaction(&self) -> AppResult<()> {
        self.session.rollback().await
    }

    fn save_changes(&self, touched: &mut [&mut dyn AggregateRoot]) -> Vec<Box<dyn DomainEvent>> {
        stamp_and_drain(touched, &self.actor, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_actor_wins() {
        assert_eq!(resolve_actor(Some("editor".to_string())), "editor");
    }

    #[test]
    fn missing_actor_falls_back_to_system() {
        // Only meaningful when QUIZBANK_AUDIT_ACTOR is unset, as in CI.
        if env::var("QUIZBANK_AUDIT_ACTOR").is_err() {
            assert_eq!(resolve_actor(None), "system");
        }
    }
}
