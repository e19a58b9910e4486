//! Audit log domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The mutating operation a log entry documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsentAction {
    Created,
    Updated,
    Deleted,
}

/// Immutable audit record of a single create/update/delete action on a
/// consent. Created by the lifecycle service only, exactly one per
/// mutating operation; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentLog {
    pub id: Uuid,
    /// Back-reference to the affected consent. For `Deleted` entries
    /// the referenced entity no longer exists in the store.
    pub consent_id: Uuid,
    pub action: ConsentAction,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}
