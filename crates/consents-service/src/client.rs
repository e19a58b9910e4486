//! External info provider contract.

use consents_core::error::ConsentResult;

/// Source of a fallback descriptive string for consents created
/// without `additional_info`.
///
/// Implementations may fail or hang; the lifecycle service wraps every
/// call in a timeout and substitutes a configured default on any
/// failure, so a provider error never surfaces to the caller. No
/// retries are performed here.
pub trait ExternalInfoClient: Send + Sync {
    fn fetch_additional_info(&self) -> impl Future<Output = ConsentResult<String>> + Send;
}
