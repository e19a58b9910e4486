//! Pure transformations between request/response representations and
//! the consent entity.
//!
//! Nothing here performs I/O or assigns identity: ids and creation
//! timestamps are lifecycle-service responsibilities and are passed
//! in. Subject identifiers are normalized to digits-only on both the
//! create and merge paths so the stored value is canonical regardless
//! of input formatting.

use chrono::{DateTime, Utc};
use consents_core::models::consent::{Consent, ConsentStatus, CreateConsent, UpdateConsent};
use serde::Serialize;
use uuid::Uuid;

/// External projection of a consent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConsentView {
    pub id: Uuid,
    pub subject_id: String,
    pub status: ConsentStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub additional_info: Option<String>,
}

/// Strip every non-digit character. Idempotent on digits-only input.
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Build a new entity from a creation request. The caller supplies
/// the freshly generated id and the creation timestamp.
pub fn to_consent(input: CreateConsent, id: Uuid, created_at: DateTime<Utc>) -> Consent {
    Consent {
        id,
        subject_id: only_digits(&input.subject_id),
        status: input.status,
        created_at,
        expires_at: input.expires_at,
        additional_info: input.additional_info,
    }
}

/// Field-level partial merge: only present fields overwrite. `id` and
/// `created_at` are never touched.
pub fn merge(existing: Consent, update: UpdateConsent) -> Consent {
    Consent {
        id: existing.id,
        subject_id: update
            .subject_id
            .map(|s| only_digits(&s))
            .unwrap_or(existing.subject_id),
        status: update.status.unwrap_or(existing.status),
        created_at: existing.created_at,
        expires_at: update.expires_at.or(existing.expires_at),
        additional_info: update.additional_info.or(existing.additional_info),
    }
}

/// Straight projection, all fields copied as-is.
pub fn to_view(consent: &Consent) -> ConsentView {
    ConsentView {
        id: consent.id,
        subject_id: consent.subject_id.clone(),
        status: consent.status,
        created_at: consent.created_at,
        expires_at: consent.expires_at,
        additional_info: consent.additional_info.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn existing() -> Consent {
        Consent {
            id: Uuid::new_v4(),
            subject_id: "66052705094".into(),
            status: ConsentStatus::Active,
            created_at: Utc::now(),
            expires_at: Some(Utc::now() + Duration::days(30)),
            additional_info: Some("initial".into()),
        }
    }

    #[test]
    fn only_digits_strips_punctuation() {
        assert_eq!(only_digits("660.527.050-94"), "66052705094");
        assert_eq!(only_digits("abc 1-2/3"), "123");
    }

    #[test]
    fn only_digits_is_idempotent() {
        let once = only_digits("660.527.050-94");
        assert_eq!(only_digits(&once), once);
    }

    #[test]
    fn to_consent_normalizes_subject_and_keeps_given_identity() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let consent = to_consent(
            CreateConsent {
                subject_id: "660.527.050-94".into(),
                status: ConsentStatus::Active,
                expires_at: None,
                additional_info: Some("hello".into()),
            },
            id,
            now,
        );
        assert_eq!(consent.id, id);
        assert_eq!(consent.created_at, now);
        assert_eq!(consent.subject_id, "66052705094");
        assert_eq!(consent.additional_info.as_deref(), Some("hello"));
    }

    #[test]
    fn merge_with_all_fields_absent_changes_nothing() {
        let before = existing();
        let after = merge(before.clone(), UpdateConsent::default());
        assert_eq!(after, before);
    }

    #[test]
    fn merge_subject_id_only() {
        let before = existing();
        let after = merge(
            before.clone(),
            UpdateConsent {
                subject_id: Some("123.456.789-00".into()),
                ..Default::default()
            },
        );
        assert_eq!(after.subject_id, "12345678900");
        assert_eq!(after.status, before.status);
        assert_eq!(after.expires_at, before.expires_at);
        assert_eq!(after.additional_info, before.additional_info);
    }

    #[test]
    fn merge_status_only() {
        let before = existing();
        let after = merge(
            before.clone(),
            UpdateConsent {
                status: Some(ConsentStatus::Revoked),
                ..Default::default()
            },
        );
        assert_eq!(after.status, ConsentStatus::Revoked);
        assert_eq!(after.subject_id, before.subject_id);
    }

    #[test]
    fn merge_expires_at_only() {
        let before = existing();
        let new_expiry = Utc::now() + Duration::days(90);
        let after = merge(
            before.clone(),
            UpdateConsent {
                expires_at: Some(new_expiry),
                ..Default::default()
            },
        );
        assert_eq!(after.expires_at, Some(new_expiry));
        assert_eq!(after.additional_info, before.additional_info);
    }

    #[test]
    fn merge_additional_info_only() {
        let before = existing();
        let after = merge(
            before.clone(),
            UpdateConsent {
                additional_info: Some("revised".into()),
                ..Default::default()
            },
        );
        assert_eq!(after.additional_info.as_deref(), Some("revised"));
        assert_eq!(after.status, before.status);
    }

    #[test]
    fn merge_never_clears_additional_info() {
        let before = existing();
        let after = merge(before.clone(), UpdateConsent::default());
        assert_eq!(after.additional_info, before.additional_info);
    }

    #[test]
    fn merge_preserves_id_and_creation_timestamp() {
        let before = existing();
        let after = merge(
            before.clone(),
            UpdateConsent {
                subject_id: Some("999".into()),
                status: Some(ConsentStatus::Expired),
                expires_at: Some(Utc::now()),
                additional_info: Some("x".into()),
            },
        );
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn view_copies_all_fields() {
        let consent = existing();
        let view = to_view(&consent);
        assert_eq!(view.id, consent.id);
        assert_eq!(view.subject_id, consent.subject_id);
        assert_eq!(view.status, consent.status);
        assert_eq!(view.created_at, consent.created_at);
        assert_eq!(view.expires_at, consent.expires_at);
        assert_eq!(view.additional_info, consent.additional_info);
    }
}
