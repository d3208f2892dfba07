use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::events::DomainEvent;

/// Audit trail carried by every entity. Stamped by the unit of work at
/// save time; the construction-time values are placeholders until then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

impl AuditInfo {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            created_by: "system".to_string(),
            updated_at: now,
            updated_by: "system".to_string(),
        }
    }

    pub fn stamp_created(&mut self, actor: &str, at: DateTime<Utc>) {
        self.created_at = at;
        self.created_by = actor.to_string();
        self.updated_at = at;
        self.updated_by = actor.to_string();
    }

    pub fn stamp_modified(&mut self, actor: &str, at: DateTime<Utc>) {
        self.updated_at = at;
        self.updated_by = actor.to_string();
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Persistence-facing surface of an aggregate: identity, audit trail and
/// the queued domain events. The unit of work is the only caller of
/// `take_events` outside of tests.
pub trait AggregateRoot: Send {
    /// Store-assigned identity; 0 until the first save.
    fn id(&self) -> i32;

    fn audit(&self) -> &AuditInfo;

    fn audit_mut(&mut self) -> &mut AuditInfo;

    /// Drain the pending event queue, leaving it empty.
    fn take_events(&mut self) -> Vec<Box<dyn DomainEvent>>;

    /// Loaded children, visited by the unit of work so brand-new children
    /// receive their created-stamp and queued events are not lost. Leaf
    /// entities return nothing.
    fn children_mut(&mut self) -> Vec<&mut dyn AggregateRoot> {
        Vec::new()
    }
}
