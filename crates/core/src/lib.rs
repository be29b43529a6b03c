//! # EMCode Core
//!
//! Core coding logic for the EMCode E/M determination service.
//!
//! This crate contains pure domain operations:
//! - Complexity axis levels with case-insensitive wire parsing
//! - The E/M level reference table (CPT 99211-99215)
//! - The deterministic 2-of-3 classifier
//! - The coding service that resolves raw inputs and produces determinations
//!
//! **No API concerns**: HTTP servers, OpenAPI schemas, or CLI surfaces belong
//! in `api-rest`, `api-shared`, or the `emcode` binary.

pub mod classify;
pub mod complexity;
pub mod error;
pub mod level;
pub mod service;

pub use classify::determine;
pub use complexity::{Axis, CareComplexity, MdmComplexity};
pub use error::{EmError, EmResult};
pub use level::EmLevel;
pub use service::{ComplexityRanks, Determination, EmCodingService, ResolutionMode};
