//! Complexity axis levels and their wire representation.
//!
//! CMS defines three complexity axes for an E/M determination: history, exam
//! and medical decision making (MDM). History and exam share one ordinal
//! scale; MDM has its own. Each level maps to an integer rank 1-4 used by
//! the 2-of-3 rule.
//!
//! Wire parsing is case-insensitive. Parsing returns `Option` so callers
//! choose how to treat unrecognised input; see
//! [`crate::service::ResolutionMode`].

use serde::{Deserialize, Serialize};

/// The three CMS complexity axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    History,
    Exam,
    Mdm,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Axis::History => "history",
            Axis::Exam => "exam",
            Axis::Mdm => "MDM",
        };
        write!(f, "{label}")
    }
}

/// Complexity level of the history or exam axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CareComplexity {
    /// Problem-focused (rank 1).
    ProblemFocused,
    /// Expanded problem-focused (rank 2).
    ExpandedProblemFocused,
    /// Detailed (rank 3).
    Detailed,
    /// Comprehensive (rank 4).
    Comprehensive,
}

impl CareComplexity {
    /// Convert to the canonical wire label.
    pub fn to_wire(self) -> &'static str {
        match self {
            CareComplexity::ProblemFocused => "problem-focused",
            CareComplexity::ExpandedProblemFocused => "expanded-problem-focused",
            CareComplexity::Detailed => "detailed",
            CareComplexity::Comprehensive => "comprehensive",
        }
    }

    /// Parse from a wire label, case-insensitively.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "problem-focused" => Some(CareComplexity::ProblemFocused),
            "expanded-problem-focused" => Some(CareComplexity::ExpandedProblemFocused),
            "detailed" => Some(CareComplexity::Detailed),
            "comprehensive" => Some(CareComplexity::Comprehensive),
            _ => None,
        }
    }

    /// Numeric rank 1-4 used by the 2-of-3 rule.
    pub fn rank(self) -> u8 {
        match self {
            CareComplexity::ProblemFocused => 1,
            CareComplexity::ExpandedProblemFocused => 2,
            CareComplexity::Detailed => 3,
            CareComplexity::Comprehensive => 4,
        }
    }
}

impl std::fmt::Display for CareComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

/// Complexity level of the medical decision making axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MdmComplexity {
    /// Straightforward (rank 1).
    Straightforward,
    /// Low (rank 2).
    Low,
    /// Moderate (rank 3).
    Moderate,
    /// High (rank 4).
    High,
}

impl MdmComplexity {
    /// Convert to the canonical wire label.
    pub fn to_wire(self) -> &'static str {
        match self {
            MdmComplexity::Straightforward => "straightforward",
            MdmComplexity::Low => "low",
            MdmComplexity::Moderate => "moderate",
            MdmComplexity::High => "high",
        }
    }

    /// Parse from a wire label, case-insensitively.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "straightforward" => Some(MdmComplexity::Straightforward),
            "low" => Some(MdmComplexity::Low),
            "moderate" => Some(MdmComplexity::Moderate),
            "high" => Some(MdmComplexity::High),
            _ => None,
        }
    }

    /// Numeric rank 1-4 used by the 2-of-3 rule.
    pub fn rank(self) -> u8 {
        match self {
            MdmComplexity::Straightforward => 1,
            MdmComplexity::Low => 2,
            MdmComplexity::Moderate => 3,
            MdmComplexity::High => 4,
        }
    }
}

impl std::fmt::Display for MdmComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}
