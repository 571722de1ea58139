//! Attribute field identifiers
//!
//! Soft skills are tracked as named integer fields. The identifier enum
//! plus the dispatch accessors on `AttributeVector` let callers operate on
//! named fields generically without any runtime reflection.

use serde::{Deserialize, Serialize};

/// Identifier for one tracked soft-skill attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeId {
    AnalyticalReasoning,
    CreativeExpression,
    SocialCommunication,
    Leadership,
    Courage,
    AttentionToDetail,
    Dexterity,
    SpatialOrientation,
    Endurance,
    StressResistance,
    OutdoorResilience,
    Perseverance,
    Teamwork,
    Planning,
    SelfDiscipline,
    Storytelling,
}

impl AttributeId {
    /// All attributes in canonical order
    ///
    /// This order is load-bearing: eligibility failures are reported in it,
    /// so reordering changes observable output.
    pub const ALL: [AttributeId; 16] = [
        AttributeId::AnalyticalReasoning,
        AttributeId::CreativeExpression,
        AttributeId::SocialCommunication,
        AttributeId::Leadership,
        AttributeId::Courage,
        AttributeId::AttentionToDetail,
        AttributeId::Dexterity,
        AttributeId::SpatialOrientation,
        AttributeId::Endurance,
        AttributeId::StressResistance,
        AttributeId::OutdoorResilience,
        AttributeId::Perseverance,
        AttributeId::Teamwork,
        AttributeId::Planning,
        AttributeId::SelfDiscipline,
        AttributeId::Storytelling,
    ];

    /// Human-readable name for reports and reasons
    pub fn label(&self) -> &'static str {
        match self {
            Self::AnalyticalReasoning => "analytical reasoning",
            Self::CreativeExpression => "creative expression",
            Self::SocialCommunication => "social communication",
            Self::Leadership => "leadership",
            Self::Courage => "courage",
            Self::AttentionToDetail => "attention to detail",
            Self::Dexterity => "dexterity",
            Self::SpatialOrientation => "spatial orientation",
            Self::Endurance => "endurance",
            Self::StressResistance => "stress resistance",
            Self::OutdoorResilience => "outdoor resilience",
            Self::Perseverance => "perseverance",
            Self::Teamwork => "teamwork",
            Self::Planning => "planning",
            Self::SelfDiscipline => "self-discipline",
            Self::Storytelling => "storytelling",
        }
    }

    /// Stable catalog code for this attribute
    pub fn code(&self) -> &'static str {
        match self {
            Self::AnalyticalReasoning => "analytical_reasoning",
            Self::CreativeExpression => "creative_expression",
            Self::SocialCommunication => "social_communication",
            Self::Leadership => "leadership",
            Self::Courage => "courage",
            Self::AttentionToDetail => "attention_to_detail",
            Self::Dexterity => "dexterity",
            Self::SpatialOrientation => "spatial_orientation",
            Self::Endurance => "endurance",
            Self::StressResistance => "stress_resistance",
            Self::OutdoorResilience => "outdoor_resilience",
            Self::Perseverance => "perseverance",
            Self::Teamwork => "teamwork",
            Self::Planning => "planning",
            Self::SelfDiscipline => "self_discipline",
            Self::Storytelling => "storytelling",
        }
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }
}
