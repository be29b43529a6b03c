//! The E/M level reference table (2021/2023 CMS guidelines).

/// An E/M billing level, CPT 99211-99215.
///
/// `Level1` (99211) exists in the reference table but is never produced by
/// the 2-of-3 rule: the lowest achievable rank is 1, which maps to 99212.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmLevel {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl EmLevel {
    /// All levels, in ascending order of complexity.
    pub const ALL: [EmLevel; 5] = [
        EmLevel::Level1,
        EmLevel::Level2,
        EmLevel::Level3,
        EmLevel::Level4,
        EmLevel::Level5,
    ];

    /// The CPT code for this level.
    pub fn code(self) -> &'static str {
        match self {
            EmLevel::Level1 => "99211",
            EmLevel::Level2 => "99212",
            EmLevel::Level3 => "99213",
            EmLevel::Level4 => "99214",
            EmLevel::Level5 => "99215",
        }
    }

    /// The short display name for this level.
    pub fn name(self) -> &'static str {
        match self {
            EmLevel::Level1 => "Level 1",
            EmLevel::Level2 => "Level 2",
            EmLevel::Level3 => "Level 3",
            EmLevel::Level4 => "Level 4",
            EmLevel::Level5 => "Level 5",
        }
    }

    /// The documentation requirement for this level.
    pub fn description(self) -> &'static str {
        match self {
            EmLevel::Level1 => "Minimal complexity, minimal documentation",
            EmLevel::Level2 => "Straightforward, minimal complexity",
            EmLevel::Level3 => {
                "Low complexity, requires 2 of 3: problem-focused history, exam, straightforward MDM"
            }
            EmLevel::Level4 => {
                "Moderate complexity, requires 2 of 3: detailed history, exam, moderate MDM"
            }
            EmLevel::Level5 => {
                "High complexity, requires 2 of 3: comprehensive history, exam, high MDM"
            }
        }
    }

    /// Look up a level by its CPT code.
    pub fn from_code(code: &str) -> Option<Self> {
        EmLevel::ALL.into_iter().find(|level| level.code() == code)
    }
}

impl std::fmt::Display for EmLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for level in EmLevel::ALL {
            assert_eq!(EmLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(EmLevel::from_code("99216"), None);
    }

    #[test]
    fn levels_are_ordered_by_complexity() {
        assert!(EmLevel::Level1 < EmLevel::Level5);
        assert!(EmLevel::Level3 < EmLevel::Level4);
    }

    #[test]
    fn names_match_codes() {
        assert_eq!(EmLevel::Level2.name(), "Level 2");
        assert_eq!(EmLevel::Level2.code(), "99212");
        assert_eq!(EmLevel::Level5.name(), "Level 5");
        assert_eq!(EmLevel::Level5.code(), "99215");
    }
}
