//! Consents Core — domain models, error taxonomy, and store contracts
//! for the consent lifecycle.
//!
//! This crate is engine-free: it defines the repository traits the
//! lifecycle service is written against, but no persistence
//! implementation.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{ConsentError, ConsentResult, FieldViolation};
