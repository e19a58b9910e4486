//! Consents Service — consent lifecycle orchestration: entity
//! creation/merge, best-effort enrichment, persistence, and audit
//! logging.

pub mod client;
pub mod config;
pub mod mapper;
pub mod service;

pub use client::ExternalInfoClient;
pub use config::ServiceConfig;
pub use mapper::ConsentView;
pub use service::ConsentService;
