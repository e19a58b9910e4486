//! Consent lifecycle service — create/get/list/update/delete
//! orchestration with guaranteed audit logging.

use chrono::Utc;
use consents_core::error::{ConsentError, ConsentResult};
use consents_core::models::consent::{Consent, CreateConsent, UpdateConsent};
use consents_core::models::consent_log::{ConsentAction, ConsentLog};
use consents_core::repository::{ConsentLogRepository, ConsentRepository, Page, PageRequest};
use uuid::Uuid;

use crate::client::ExternalInfoClient;
use crate::config::ServiceConfig;
use crate::mapper::{self, ConsentView};

/// Consent lifecycle service.
///
/// Generic over the store and provider contracts so the orchestration
/// has no dependency on any persistence engine. Each operation is a
/// short sequential async pipeline; the only independent steps are
/// the page-content and count fetches in [`list`](Self::list), which
/// run concurrently.
pub struct ConsentService<R, L, E>
where
    R: ConsentRepository,
    L: ConsentLogRepository,
    E: ExternalInfoClient,
{
    repo: R,
    log_repo: L,
    info_client: E,
    config: ServiceConfig,
}

impl<R, L, E> ConsentService<R, L, E>
where
    R: ConsentRepository,
    L: ConsentLogRepository,
    E: ExternalInfoClient,
{
    pub fn new(repo: R, log_repo: L, info_client: E, config: ServiceConfig) -> Self {
        Self {
            repo,
            log_repo,
            info_client,
            config,
        }
    }

    /// Create a consent and write a `Created` audit entry.
    ///
    /// When the request omits `additional_info`, the external provider
    /// is consulted once (under a timeout); on provider failure the
    /// configured default string is used instead. When the request
    /// carries `additional_info`, the provider is not called at all.
    ///
    /// A log-write failure after a successful save propagates to the
    /// caller, but the saved entity is not rolled back.
    pub async fn create(&self, input: CreateConsent) -> ConsentResult<ConsentView> {
        let mut consent = mapper::to_consent(input, Uuid::new_v4(), Utc::now());

        if consent.additional_info.is_none() {
            tracing::info!(id = %consent.id, "additional_info absent, consulting external provider");
            consent.additional_info = Some(self.fetch_additional_info().await);
        } else {
            tracing::info!(id = %consent.id, "additional_info provided, skipping external call");
        }

        let saved = self.repo.save(consent).await?;
        self.log_change(&saved, ConsentAction::Created, "Consent created successfully.")
            .await?;
        Ok(mapper::to_view(&saved))
    }

    /// Look up a consent by its canonical id string. Reads produce no
    /// audit entry.
    pub async fn get_by_id(&self, id: &str) -> ConsentResult<ConsentView> {
        let uuid = parse_id(id)?;
        let consent = self.find_existing(uuid).await?;
        Ok(mapper::to_view(&consent))
    }

    /// One sorted page of consents plus pagination metadata.
    ///
    /// Page content and total count come from two independent queries
    /// issued concurrently; a concurrent write between them may leave
    /// the count inconsistent with the listed page. Accepted
    /// weak-consistency behavior, there is no snapshot isolation here.
    pub async fn list(&self, request: PageRequest) -> ConsentResult<Page<ConsentView>> {
        let (items, total_elements) =
            tokio::try_join!(self.repo.find_page(&request), self.repo.count())?;

        let views = items.iter().map(mapper::to_view).collect();
        Ok(Page::assemble(
            views,
            request.page_number,
            request.page_size,
            total_elements,
        ))
    }

    /// Partial-merge update: absent request fields leave the stored
    /// values untouched. Writes an `Updated` audit entry; the same
    /// log-failure asymmetry as [`create`](Self::create) applies.
    pub async fn update(&self, id: &str, input: UpdateConsent) -> ConsentResult<ConsentView> {
        let uuid = parse_id(id)?;
        let existing = self.find_existing(uuid).await?;
        let merged = mapper::merge(existing, input);

        let saved = self.repo.save(merged).await?;
        self.log_change(&saved, ConsentAction::Updated, "Consent details updated.")
            .await?;
        Ok(mapper::to_view(&saved))
    }

    /// Delete a consent and write a `Deleted` audit entry referencing
    /// the removed entity.
    ///
    /// `NotFound` short-circuits before any mutation. The entity is
    /// read before deletion; a log-write failure after a successful
    /// delete does not reverse the delete.
    pub async fn delete(&self, id: &str) -> ConsentResult<()> {
        let uuid = parse_id(id)?;
        let consent = self.find_existing(uuid).await?;

        self.repo.delete(&consent).await?;
        self.log_change(&consent, ConsentAction::Deleted, "Consent has been deleted.")
            .await
    }

    async fn find_existing(&self, id: Uuid) -> ConsentResult<Consent> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ConsentError::NotFound { id: id.to_string() })
    }

    /// Best-effort enrichment: one provider call under the configured
    /// timeout, falling back to the default string on failure or
    /// timeout. The provider error never propagates.
    async fn fetch_additional_info(&self) -> String {
        let call = self.info_client.fetch_additional_info();
        match tokio::time::timeout(self.config.provider_timeout, call).await {
            Ok(Ok(info)) => info,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "external info provider failed, using default");
                self.config.default_additional_info.clone()
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.provider_timeout.as_millis() as u64,
                    "external info provider timed out, using default"
                );
                self.config.default_additional_info.clone()
            }
        }
    }

    /// Append one audit entry for a completed mutation. Failures are
    /// logged and returned unchanged; the preceding mutation stands.
    async fn log_change(
        &self,
        consent: &Consent,
        action: ConsentAction,
        details: &str,
    ) -> ConsentResult<()> {
        let entry = ConsentLog {
            id: Uuid::new_v4(),
            consent_id: consent.id,
            action,
            timestamp: Utc::now(),
            details: details.to_string(),
        };

        match self.log_repo.save(entry).await {
            Ok(saved) => {
                tracing::info!(
                    action = ?saved.action,
                    consent_id = %saved.consent_id,
                    "audit entry recorded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    action = ?action,
                    consent_id = %consent.id,
                    error = %e,
                    "failed to record audit entry"
                );
                Err(e)
            }
        }
    }
}

fn parse_id(id: &str) -> ConsentResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ConsentError::InvalidArgument {
        reason: format!("malformed consent id: {id}"),
    })
}
