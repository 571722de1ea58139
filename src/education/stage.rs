//! Education stages and the ladder between them

use serde::{Deserialize, Serialize};

/// Ordered education stages with EQF-like ranks
///
/// The discriminant doubles as the rank used by eligibility gates;
/// higher = more advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EducationStage {
    PrimarySchool = 1,
    MiddleSchool = 2,
    HighSchool = 3,
    Vocational = 4,
    Bachelor = 5,
    Master = 6,
    Doctorate = 7,
}

impl EducationStage {
    /// All stages in rank order
    pub const ALL: [EducationStage; 7] = [
        EducationStage::PrimarySchool,
        EducationStage::MiddleSchool,
        EducationStage::HighSchool,
        EducationStage::Vocational,
        EducationStage::Bachelor,
        EducationStage::Master,
        EducationStage::Doctorate,
    ];

    /// Stages that carry a subject profile
    pub const TERTIARY: [EducationStage; 4] = [
        EducationStage::Vocational,
        EducationStage::Bachelor,
        EducationStage::Master,
        EducationStage::Doctorate,
    ];

    /// EQF-like rank (1..=7)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Simulated years needed to complete this stage
    pub fn years_to_complete(&self) -> u8 {
        match self {
            Self::PrimarySchool => 6,
            Self::MiddleSchool => 3,
            Self::HighSchool => 3,
            Self::Vocational => 3,
            Self::Bachelor => 3,
            Self::Master => 2,
            Self::Doctorate => 4,
        }
    }

    /// Whether this stage is scoped to a subject profile
    pub fn is_tertiary(&self) -> bool {
        self.rank() >= Self::Vocational.rank()
    }

    /// Human-readable name for reports and reasons
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrimarySchool => "primary school",
            Self::MiddleSchool => "middle school",
            Self::HighSchool => "high school",
            Self::Vocational => "vocational school",
            Self::Bachelor => "bachelor's degree",
            Self::Master => "master's degree",
            Self::Doctorate => "doctorate",
        }
    }

    /// Stable catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Self::PrimarySchool => "primary_school",
            Self::MiddleSchool => "middle_school",
            Self::HighSchool => "high_school",
            Self::Vocational => "vocational",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Doctorate => "doctorate",
        }
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_strictly_increase() {
        for pair in EducationStage::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
        assert_eq!(EducationStage::PrimarySchool.rank(), 1);
        assert_eq!(EducationStage::Doctorate.rank(), 7);
    }

    #[test]
    fn test_tertiary_split() {
        assert!(!EducationStage::HighSchool.is_tertiary());
        for stage in EducationStage::TERTIARY {
            assert!(stage.is_tertiary());
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for stage in EducationStage::ALL {
            assert_eq!(EducationStage::from_code(stage.code()), Some(stage));
        }
        assert_eq!(EducationStage::from_code("kindergarten"), None);
    }

    #[test]
    fn test_years_are_positive() {
        for stage in EducationStage::ALL {
            assert!(stage.years_to_complete() > 0);
        }
    }
}
