//! Leveled hard-skill credentials
//!
//! Four credential families (portfolio projects, certifications, software,
//! licenses) share one state machine: Absent -> Level 1 -> Level 2 ->
//! Level 3, advancing one discrete step at a time and saturating at the
//! maximum. Presence gates eligibility; the level matters only to
//! training cost and availability elsewhere.

pub mod identity;
pub mod level;
pub mod portfolio;
pub mod set;

pub use identity::{
    Certification, CredentialIdentity, CredentialKind, LicenseKind, ProjectType, SoftwareSkill,
};
pub use level::ProficiencyLevel;
pub use portfolio::CredentialPortfolio;
pub use set::{AdvanceOutcome, LeveledCredentialSet};
