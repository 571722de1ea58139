//! Tertiary subject profiles

use serde::{Deserialize, Serialize};

/// Field of study scoping tertiary degrees and requirement tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectProfile {
    Business,
    Engineering,
    Health,
    Arts,
    Science,
    Education,
    Technology,
    Sports,
    Agriculture,
    Humanities,
    Law,
    Design,
    Service,
}

impl SubjectProfile {
    /// All subject profiles in canonical order
    pub const ALL: [SubjectProfile; 13] = [
        SubjectProfile::Business,
        SubjectProfile::Engineering,
        SubjectProfile::Health,
        SubjectProfile::Arts,
        SubjectProfile::Science,
        SubjectProfile::Education,
        SubjectProfile::Technology,
        SubjectProfile::Sports,
        SubjectProfile::Agriculture,
        SubjectProfile::Humanities,
        SubjectProfile::Law,
        SubjectProfile::Design,
        SubjectProfile::Service,
    ];

    /// Whether the curriculum leans on mathematics and formal analysis
    ///
    /// Quantitative subjects pick up analytical-reasoning floors at
    /// Bachelor level and above.
    pub fn is_quantitative(&self) -> bool {
        matches!(
            self,
            Self::Business | Self::Engineering | Self::Science | Self::Technology
        )
    }

    /// Whether a vocational track exists for this subject
    ///
    /// Subjects without one are never offered at the Vocational stage.
    pub fn vocational_eligible(&self) -> bool {
        !matches!(self, Self::Law | Self::Science | Self::Humanities)
    }

    /// Human-readable name for reports and reasons
    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Engineering => "engineering",
            Self::Health => "health",
            Self::Arts => "arts",
            Self::Science => "science",
            Self::Education => "education",
            Self::Technology => "technology",
            Self::Sports => "sports",
            Self::Agriculture => "agriculture",
            Self::Humanities => "humanities",
            Self::Law => "law",
            Self::Design => "design",
            Self::Service => "service",
        }
    }

    /// Stable catalog code (same as the label for subjects)
    pub fn code(&self) -> &'static str {
        self.label()
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.code() == code)
    }
}
