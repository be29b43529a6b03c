//! The coding service: raw input resolution plus the classifier.
//!
//! The service resolves the three axis strings to complexity levels, runs
//! the 2-of-3 rule and packages the result with the ranks it used, so a
//! caller can display or audit exactly how the code was reached.

use crate::classify::determine;
use crate::complexity::{Axis, CareComplexity, MdmComplexity};
use crate::error::{EmError, EmResult};
use crate::level::EmLevel;

/// How unrecognised axis input is treated.
///
/// Lenient mode coerces anything unrecognised to the lowest rank, which can
/// silently under-code a visit when a caller passes a typo'd level, so each
/// defaulted axis is logged at warn level. Strict mode reports the first
/// unrecognised value instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolutionMode {
    #[default]
    Lenient,
    Strict,
}

/// The three resolved ranks, kept for display and audit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplexityRanks {
    pub history: u8,
    pub exam: u8,
    pub mdm: u8,
}

/// The outcome of one E/M determination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Determination {
    /// The determined E/M level.
    pub level: EmLevel,
    /// The numeric ranks the 2-of-3 rule ran on.
    pub ranks: ComplexityRanks,
    /// Resolved history complexity.
    pub history: CareComplexity,
    /// Resolved exam complexity.
    pub exam: CareComplexity,
    /// Resolved MDM complexity.
    pub mdm: MdmComplexity,
    /// Human-readable justification, rendered from the resolved labels.
    pub reasoning: String,
    /// Axes whose input was unrecognised and coerced to the lowest rank.
    pub defaulted: Vec<Axis>,
}

/// Pure coding operations - no API concerns.
#[derive(Default, Clone)]
pub struct EmCodingService;

impl EmCodingService {
    /// Creates a new instance of EmCodingService.
    pub fn new() -> Self {
        Self
    }

    /// Determine the E/M level for the three raw axis inputs.
    ///
    /// Inputs are matched case-insensitively against the CMS level labels.
    /// In [`ResolutionMode::Lenient`] an unrecognised or empty input is
    /// coerced to the lowest rank and recorded in
    /// [`Determination::defaulted`]; in [`ResolutionMode::Strict`] it is
    /// returned as [`EmError::UnrecognisedComplexity`].
    ///
    /// The call is deterministic and stateless: identical inputs always
    /// produce identical determinations.
    ///
    /// # Errors
    /// Returns `EmError::UnrecognisedComplexity` in strict mode if any axis
    /// input does not name a level.
    pub fn calculate(
        &self,
        history: &str,
        exam: &str,
        mdm: &str,
        mode: ResolutionMode,
    ) -> EmResult<Determination> {
        let mut defaulted = Vec::new();

        let history = resolve_care(Axis::History, history, mode, &mut defaulted)?;
        let exam = resolve_care(Axis::Exam, exam, mode, &mut defaulted)?;
        let mdm = resolve_mdm(mdm, mode, &mut defaulted)?;

        let ranks = ComplexityRanks {
            history: history.rank(),
            exam: exam.rank(),
            mdm: mdm.rank(),
        };
        let level = determine(ranks.history, ranks.exam, ranks.mdm);

        let reasoning = format!(
            "Based on provided complexities: History={history}, Exam={exam}, MDM={mdm}"
        );

        tracing::debug!(
            code = level.code(),
            history = %history,
            exam = %exam,
            mdm = %mdm,
            "determined E/M level"
        );

        Ok(Determination {
            level,
            ranks,
            history,
            exam,
            mdm,
            reasoning,
            defaulted,
        })
    }

    /// The full E/M reference table, in ascending order of complexity.
    pub fn levels(&self) -> [EmLevel; 5] {
        EmLevel::ALL
    }
}

fn resolve_care(
    axis: Axis,
    raw: &str,
    mode: ResolutionMode,
    defaulted: &mut Vec<Axis>,
) -> EmResult<CareComplexity> {
    match CareComplexity::from_wire(raw) {
        Some(level) => Ok(level),
        None => {
            coerce(axis, raw, mode)?;
            defaulted.push(axis);
            Ok(CareComplexity::ProblemFocused)
        }
    }
}

fn resolve_mdm(raw: &str, mode: ResolutionMode, defaulted: &mut Vec<Axis>) -> EmResult<MdmComplexity> {
    match MdmComplexity::from_wire(raw) {
        Some(level) => Ok(level),
        None => {
            coerce(Axis::Mdm, raw, mode)?;
            defaulted.push(Axis::Mdm);
            Ok(MdmComplexity::Straightforward)
        }
    }
}

/// Gate for the lowest-rank coercion. Strict mode turns the coercion into
/// an error; lenient mode allows it, warning when the input was an actual
/// value rather than simply absent.
fn coerce(axis: Axis, raw: &str, mode: ResolutionMode) -> EmResult<()> {
    match mode {
        ResolutionMode::Strict => Err(EmError::UnrecognisedComplexity {
            axis,
            value: raw.to_owned(),
        }),
        ResolutionMode::Lenient => {
            if !raw.trim().is_empty() {
                tracing::warn!(
                    %axis,
                    value = raw,
                    "unrecognised complexity, defaulting to lowest rank"
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculate(history: &str, exam: &str, mdm: &str) -> Determination {
        EmCodingService::new()
            .calculate(history, exam, mdm, ResolutionMode::Lenient)
            .expect("lenient calculation cannot fail")
    }

    #[test]
    fn boundary_scenarios() {
        assert_eq!(
            calculate("comprehensive", "comprehensive", "high").level,
            EmLevel::Level5
        );
        assert_eq!(
            calculate("detailed", "detailed", "moderate").level,
            EmLevel::Level4
        );
        assert_eq!(
            calculate("expanded-problem-focused", "problem-focused", "low").level,
            EmLevel::Level3
        );
        assert_eq!(
            calculate("problem-focused", "problem-focused", "straightforward").level,
            EmLevel::Level2
        );
    }

    #[test]
    fn empty_axis_counts_as_lowest_rank() {
        let det = calculate("", "detailed", "high");
        assert_eq!(det.ranks.history, 1);
        assert_eq!(det.ranks.exam, 3);
        assert_eq!(det.ranks.mdm, 4);
        // second-highest of {1, 3, 4} is 3
        assert_eq!(det.level, EmLevel::Level4);
        assert_eq!(det.defaulted, vec![Axis::History]);
    }

    #[test]
    fn unknown_input_equivalent_to_lowest_rank() {
        let typo = calculate("detaled", "detailed", "moderate");
        let lowest = calculate("problem-focused", "detailed", "moderate");
        assert_eq!(typo.level, lowest.level);
        assert_eq!(typo.ranks, lowest.ranks);
        assert_eq!(typo.defaulted, vec![Axis::History]);
        assert!(lowest.defaulted.is_empty());
    }

    #[test]
    fn inputs_are_case_insensitive() {
        let det = calculate("Comprehensive", "COMPREHENSIVE", "High");
        assert_eq!(det.level, EmLevel::Level5);
        assert!(det.defaulted.is_empty());
    }

    #[test]
    fn strict_mode_reports_the_failing_axis() {
        let err = EmCodingService::new()
            .calculate("detailed", "detaled", "moderate", ResolutionMode::Strict)
            .expect_err("typo should be rejected");
        match err {
            EmError::UnrecognisedComplexity { axis, value } => {
                assert_eq!(axis, Axis::Exam);
                assert_eq!(value, "detaled");
            }
        }
    }

    #[test]
    fn strict_mode_accepts_valid_input() {
        let det = EmCodingService::new()
            .calculate("detailed", "detailed", "moderate", ResolutionMode::Strict)
            .expect("valid input");
        assert_eq!(det.level, EmLevel::Level4);
    }

    #[test]
    fn reasoning_uses_resolved_labels() {
        let det = calculate("DETAILED", "nonsense", "moderate");
        assert_eq!(
            det.reasoning,
            "Based on provided complexities: History=detailed, Exam=problem-focused, MDM=moderate"
        );
    }

    #[test]
    fn identical_inputs_yield_identical_determinations() {
        let first = calculate("detailed", "comprehensive", "low");
        let second = calculate("detailed", "comprehensive", "low");
        assert_eq!(first, second);
    }
}
