//! Domain models for the consents system.

pub mod consent;
pub mod consent_log;
