//! Consent domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission state of a consent record.
///
/// The lifecycle service treats this set as opaque: any status accepted
/// by upstream validation may be set by an update, with no transition
/// graph enforced here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsentStatus {
    Active,
    Revoked,
    Expired,
}

/// A subject's recorded permission for data usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Consent {
    /// Assigned once by the lifecycle service at creation, immutable
    /// thereafter.
    pub id: Uuid,
    /// National identifier of the subject, stored digits-only.
    pub subject_id: String,
    pub status: ConsentStatus,
    /// Set once at first persistence, never mutated.
    pub created_at: DateTime<Utc>,
    /// Must be a future instant at creation time (checked upstream).
    pub expires_at: Option<DateTime<Utc>>,
    /// Free text, 1–50 characters when present (checked upstream).
    /// Populated from the external info provider when the creation
    /// request omits it.
    pub additional_info: Option<String>,
}

/// Validated input for creating a consent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsent {
    /// May carry formatting punctuation; normalized to digits before
    /// storage.
    pub subject_id: String,
    pub status: ConsentStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub additional_info: Option<String>,
}

/// Partial update input. `None` = leave the current value unchanged.
///
/// No field can be cleared back to null through an update; in
/// particular `additional_info`, once set, stays set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConsent {
    pub subject_id: Option<String>,
    pub status: Option<ConsentStatus>,
    pub expires_at: Option<DateTime<Utc>>,
    pub additional_info: Option<String>,
}
