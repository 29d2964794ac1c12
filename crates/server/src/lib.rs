//! Server crate for the taste engine.
//!
//! This crate contains the service facade that lets many async callers
//! share one engine: profile builds are exclusive, scoring runs concurrently.

pub mod service;

pub use service::{HealthStatus, RecommendResponse, TasteService};
