//! Requirement profile value types

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeId;
use crate::credentials::{Certification, LicenseKind, ProjectType, SoftwareSkill};
use crate::education::SubjectProfile;

/// Per-attribute minimum thresholds
///
/// Same sixteen fields as the player's attribute vector, but on the
/// derived 0..=5 scale. A threshold of zero means the attribute is
/// irrelevant to the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeThresholds {
    pub analytical_reasoning: u8,
    pub creative_expression: u8,
    pub social_communication: u8,
    pub leadership: u8,
    pub courage: u8,
    pub attention_to_detail: u8,
    pub dexterity: u8,
    pub spatial_orientation: u8,
    pub endurance: u8,
    pub stress_resistance: u8,
    pub outdoor_resilience: u8,
    pub perseverance: u8,
    pub teamwork: u8,
    pub planning: u8,
    pub self_discipline: u8,
    pub storytelling: u8,
}

impl AttributeThresholds {
    pub fn get(&self, id: AttributeId) -> u8 {
        match id {
            AttributeId::AnalyticalReasoning => self.analytical_reasoning,
            AttributeId::CreativeExpression => self.creative_expression,
            AttributeId::SocialCommunication => self.social_communication,
            AttributeId::Leadership => self.leadership,
            AttributeId::Courage => self.courage,
            AttributeId::AttentionToDetail => self.attention_to_detail,
            AttributeId::Dexterity => self.dexterity,
            AttributeId::SpatialOrientation => self.spatial_orientation,
            AttributeId::Endurance => self.endurance,
            AttributeId::StressResistance => self.stress_resistance,
            AttributeId::OutdoorResilience => self.outdoor_resilience,
            AttributeId::Perseverance => self.perseverance,
            AttributeId::Teamwork => self.teamwork,
            AttributeId::Planning => self.planning,
            AttributeId::SelfDiscipline => self.self_discipline,
            AttributeId::Storytelling => self.storytelling,
        }
    }

    pub fn set(&mut self, id: AttributeId, value: u8) {
        match id {
            AttributeId::AnalyticalReasoning => self.analytical_reasoning = value,
            AttributeId::CreativeExpression => self.creative_expression = value,
            AttributeId::SocialCommunication => self.social_communication = value,
            AttributeId::Leadership => self.leadership = value,
            AttributeId::Courage => self.courage = value,
            AttributeId::AttentionToDetail => self.attention_to_detail = value,
            AttributeId::Dexterity => self.dexterity = value,
            AttributeId::SpatialOrientation => self.spatial_orientation = value,
            AttributeId::Endurance => self.endurance = value,
            AttributeId::StressResistance => self.stress_resistance = value,
            AttributeId::OutdoorResilience => self.outdoor_resilience = value,
            AttributeId::Perseverance => self.perseverance = value,
            AttributeId::Teamwork => self.teamwork = value,
            AttributeId::Planning => self.planning = value,
            AttributeId::SelfDiscipline => self.self_discipline = value,
            AttributeId::Storytelling => self.storytelling = value,
        }
    }

    /// Attributes with a non-zero threshold, in canonical order
    pub fn relevant(&self) -> impl Iterator<Item = (AttributeId, u8)> + '_ {
        AttributeId::ALL
            .into_iter()
            .map(|id| (id, self.get(id)))
            .filter(|&(_, value)| value > 0)
    }
}

/// Fully resolved gate for an education stage, job or other unlock
///
/// Derived fresh each time it is needed; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Minimum EQF-like rank among held degrees
    pub min_education_rank: u8,
    /// When present and non-empty, some qualifying degree must also be in
    /// one of these subjects
    pub accepted_subjects: Option<Vec<SubjectProfile>>,
    pub thresholds: AttributeThresholds,
    pub required_projects: Vec<ProjectType>,
    pub required_certifications: Vec<Certification>,
    pub required_software: Vec<SoftwareSkill>,
    pub required_licenses: Vec<LicenseKind>,
}

impl RequirementProfile {
    /// Profile that gates nothing (the pre-tertiary derivation result)
    pub fn open() -> Self {
        Self::default()
    }
}
