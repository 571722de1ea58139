//! Per-player soft-skill attribute storage

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeId;
use crate::core::config::STARTING_ROLL_MAX;

/// Accumulated soft-skill attributes for one player
///
/// Every field is a non-negative integer with no storage-level ceiling.
/// Values only ever increase through boosts; display layers may render
/// them on a 0..=5 scale but the engine does not cap accumulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVector {
    pub analytical_reasoning: u32,
    pub creative_expression: u32,
    pub social_communication: u32,
    pub leadership: u32,
    pub courage: u32,
    pub attention_to_detail: u32,
    pub dexterity: u32,
    pub spatial_orientation: u32,
    pub endurance: u32,
    pub stress_resistance: u32,
    pub outdoor_resilience: u32,
    pub perseverance: u32,
    pub teamwork: u32,
    pub planning: u32,
    pub self_discipline: u32,
    pub storytelling: u32,
}

impl AttributeVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll small starting values at player creation
    ///
    /// Deterministic given the rng seed. Rolls stay in 0..=STARTING_ROLL_MAX
    /// so a fresh player never satisfies a tertiary essential threshold.
    pub fn starting_roll(rng: &mut impl Rng) -> Self {
        let mut vector = Self::default();
        for id in AttributeId::ALL {
            vector.set(id, rng.gen_range(0..=STARTING_ROLL_MAX));
        }
        vector
    }

    pub fn get(&self, id: AttributeId) -> u32 {
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

    pub fn set(&mut self, id: AttributeId, value: u32) {
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

    /// Additive boost to one attribute
    pub fn boost(&mut self, id: AttributeId, delta: u32) {
        self.set(id, self.get(id).saturating_add(delta));
    }

    /// Apply a set of activity-defined boost weights
    pub fn apply_boosts(&mut self, boosts: &[(AttributeId, u32)]) {
        for &(id, delta) in boosts {
            self.boost(id, delta);
        }
    }
}
