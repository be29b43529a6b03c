//! # API Shared
//!
//! Shared utilities and definitions for EMCode APIs.
//!
//! Contains:
//! - Wire types for the REST API (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the server binary for common functionality.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
