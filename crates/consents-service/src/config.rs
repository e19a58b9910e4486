//! Lifecycle service configuration.

use std::time::Duration;

/// Configuration for the consent lifecycle service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Fallback `additional_info` value used when the external info
    /// provider fails or times out.
    pub default_additional_info: String,
    /// Upper bound on a single provider call. Enrichment is
    /// best-effort; create never blocks past this.
    pub provider_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_additional_info: "Default information".into(),
            provider_timeout: Duration::from_secs(3),
        }
    }
}
