//! Shared HTTP plumbing for Vitala services.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
