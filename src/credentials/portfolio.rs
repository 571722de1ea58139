//! Bundle of the four per-kind credential sets

use serde::{Deserialize, Serialize};

use crate::credentials::{
    Certification, LeveledCredentialSet, LicenseKind, ProjectType, SoftwareSkill,
};

/// All hard-skill credentials a player holds, one set per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPortfolio {
    pub projects: LeveledCredentialSet<ProjectType>,
    pub certifications: LeveledCredentialSet<Certification>,
    pub software: LeveledCredentialSet<SoftwareSkill>,
    pub licenses: LeveledCredentialSet<LicenseKind>,
}

impl CredentialPortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total credentials held across every kind
    pub fn total_held(&self) -> usize {
        self.projects.len() + self.certifications.len() + self.software.len() + self.licenses.len()
    }

    /// Drop every credential (explicit player-reset flows only)
    pub fn clear(&mut self) {
        self.projects = LeveledCredentialSet::new();
        self.certifications = LeveledCredentialSet::new();
        self.software = LeveledCredentialSet::new();
        self.licenses = LeveledCredentialSet::new();
    }
}
