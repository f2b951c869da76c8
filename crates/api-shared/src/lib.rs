//! # API Shared
//!
//! Shared definitions for the wiki APIs.
//!
//! Contains:
//! - Health check types and `HealthService`
//! - The confirmation texts returned by mutating article operations
//!
//! Used by `api-rest`; anything transport-specific stays out of this crate.

pub mod health;
pub mod messages;

pub use health::{HealthRes, HealthService};
