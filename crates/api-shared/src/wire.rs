//! Wire models for the EMCode REST API.
//!
//! These are the JSON request/response shapes served by `api-rest`. Axis
//! fields are plain strings on the wire; typed resolution happens in
//! `emcode-core`, which also decides what unrecognised input means
//! (lenient coercion vs. a validation error, selected by `strict`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Request body for an E/M determination.
///
/// All axis fields are optional: an absent axis is treated as the lowest
/// rank (unless `strict` is set, in which case it is rejected).
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CalculateEmReq {
    /// History complexity: problem-focused, expanded-problem-focused,
    /// detailed or comprehensive (case-insensitive).
    #[serde(default)]
    pub history: String,
    /// Exam complexity, same levels as history.
    #[serde(default)]
    pub exam: String,
    /// MDM complexity: straightforward, low, moderate or high
    /// (case-insensitive).
    #[serde(default)]
    pub mdm: String,
    /// Reject unrecognised axis input instead of coercing it to the
    /// lowest rank.
    #[serde(default)]
    pub strict: bool,
}

/// The numeric ranks (1-4) each axis resolved to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema)]
pub struct ComplexityRanks {
    pub history: u32,
    pub exam: u32,
    pub mdm: u32,
}

/// Response body for an E/M determination.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculateEmRes {
    /// The determined CPT code, 99212-99215.
    pub code: String,
    /// Short level name, e.g. "Level 4".
    pub name: String,
    /// The level's documentation requirement.
    pub description: String,
    /// Justification rendered from the resolved axis labels.
    pub reasoning: String,
    /// The ranks the 2-of-3 rule ran on, for display and audit.
    pub ranks: ComplexityRanks,
}

/// One row of the E/M reference table.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EmLevelInfo {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// The full E/M reference table.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListLevelsRes {
    pub levels: Vec<EmLevelInfo>,
}

/// Error body for rejected requests.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}
