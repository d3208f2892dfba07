use async_trait::async_trait;

use crate::domain::entities::AggregateRoot;
use crate::domain::events::DomainEvent;
use crate::shared::errors::AppResult;

/// Port for the transactional boundary around repository writes.
///
/// Handlers drive it explicitly: begin, write through repositories, call
/// `save_changes` on every touched aggregate, then commit. Nested
/// transactions are not supported: `begin_transaction` while one is
/// active is an error, while commit/rollback with no active transaction
/// are no-ops.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin_transaction(&self) -> AppResult<()>;

    async fn commit_transaction(&self) -> AppResult<()>;

    async fn rollback_transaction(&self) -> AppResult<()>;

    /// Stamp audit fields on every touched aggregate (created-stamp for
    /// unsaved ones, modified-stamp otherwise) and drain their queued
    /// domain events. The caller hands the returned events to the
    /// publisher hook after a successful commit.
    fn save_changes(&self, touched: &mut [&mut dyn AggregateRoot]) -> Vec<Box<dyn DomainEvent>>;
}

/// Canonical `save_changes` semantics, shared by every implementation.
///
/// Touched roots get a modified-stamp (created-stamp when still unsaved);
/// loaded children are visited recursively so brand-new ones are
/// created-stamped and no queued event is left behind. Children that
/// already exist keep their audit trail untouched.
pub fn stamp_and_drain(
    touched: &mut [&mut dyn AggregateRoot],
    actor: &str,
    at: chrono::DateTime<chrono::Utc>,
) -> Vec<Box<dyn DomainEvent>> {
    let mut events = Vec::new();
    for root in touched.iter_mut() {
        if root.id() == 0 {
            root.audit_mut().stamp_created(actor, at);
        } else {
            root.audit_mut().stamp_modified(actor, at);
        }
        events.extend(root.take_events());
        for child in root.children_mut() {
            visit_child(child, actor, at, &mut events);
        }
    }
    events
}

fn visit_child(
    node: &mut dyn AggregateRoot,
    actor: &str,
    at: chrono::DateTime<chrono::Utc>,
    events: &mut Vec<Box<dyn DomainEvent>>,
) {
    if node.id() == 0 {
        node.audit_mut().stamp_created(actor, at);
    }
    events.extend(node.take_events());
    for child in node.children_mut() {
        visit_child(child, actor, at, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AggregateRoot, Subject};
    use chrono::Utc;

    #[test]
    fn stamps_root_and_new_children_and_drains_events() {
        let mut subject = Subject::new("Math").unwrap();
        subject.add_topic("Algebra").unwrap();

        let at = Utc::now();
        let events = stamp_and_drain(&mut [&mut subject], "editor", at);

        // Created + topic-added drained from the root.
        assert_eq!(events.len(), 2);
        assert!(subject.pending_events().is_empty());
        assert_eq!(subject.audit().created_by, "editor");
        assert_eq!(subject.topics()[0].audit().created_by, "editor");
    }
}
