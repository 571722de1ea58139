//! Yearly activities and their attribute boosts
//!
//! Each simulated year the player picks activities; each one adds its
//! authored weights to the attribute vector. How many activities a year
//! allows is the caller's policy, not the engine's.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeId, AttributeVector};

/// Identifier for a selectable yearly activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityId {
    DebateClub,
    ChessClub,
    SportsTeam,
    PartTimeJob,
    Volunteering,
    ScoutingTrips,
    DramaClub,
    StudyGroup,
    RoboticsClub,
    StudentCouncil,
    HikingClub,
    ArtWorkshop,
}

/// Definition of one yearly activity
#[derive(Debug, Clone)]
pub struct ActivityDefinition {
    pub id: ActivityId,
    pub name: &'static str,
    /// Attribute weights added per year of the activity
    pub boosts: &'static [(AttributeId, u32)],
}

/// All selectable activities
pub static ACTIVITY_LIBRARY: &[ActivityDefinition] = &[
    ActivityDefinition {
        id: ActivityId::DebateClub,
        name: "Debate Club",
        boosts: &[
            (AttributeId::SocialCommunication, 1),
            (AttributeId::Storytelling, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::ChessClub,
        name: "Chess Club",
        boosts: &[
            (AttributeId::AnalyticalReasoning, 1),
            (AttributeId::Planning, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::SportsTeam,
        name: "Sports Team",
        boosts: &[
            (AttributeId::Endurance, 1),
            (AttributeId::Teamwork, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::PartTimeJob,
        name: "Part-Time Job",
        boosts: &[
            (AttributeId::Planning, 1),
            (AttributeId::SelfDiscipline, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::Volunteering,
        name: "Volunteering",
        boosts: &[
            (AttributeId::Teamwork, 1),
            (AttributeId::SocialCommunication, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::ScoutingTrips,
        name: "Scouting Trips",
        boosts: &[
            (AttributeId::OutdoorResilience, 1),
            (AttributeId::Courage, 1),
            (AttributeId::SpatialOrientation, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::DramaClub,
        name: "Drama Club",
        boosts: &[
            (AttributeId::CreativeExpression, 1),
            (AttributeId::Storytelling, 1),
            (AttributeId::Courage, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::StudyGroup,
        name: "Study Group",
        boosts: &[
            (AttributeId::SelfDiscipline, 1),
            (AttributeId::Perseverance, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::RoboticsClub,
        name: "Robotics Club",
        boosts: &[
            (AttributeId::AnalyticalReasoning, 1),
            (AttributeId::Dexterity, 1),
            (AttributeId::AttentionToDetail, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::StudentCouncil,
        name: "Student Council",
        boosts: &[
            (AttributeId::Leadership, 1),
            (AttributeId::Planning, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::HikingClub,
        name: "Hiking Club",
        boosts: &[
            (AttributeId::Endurance, 1),
            (AttributeId::OutdoorResilience, 1),
        ],
    },
    ActivityDefinition {
        id: ActivityId::ArtWorkshop,
        name: "Art Workshop",
        boosts: &[
            (AttributeId::CreativeExpression, 1),
            (AttributeId::Dexterity, 1),
        ],
    },
];

/// Look up an activity definition
pub fn activity_definition(id: ActivityId) -> Option<&'static ActivityDefinition> {
    ACTIVITY_LIBRARY.iter().find(|def| def.id == id)
}

/// Apply one year of an activity to the player's attributes
pub fn apply_activity(attributes: &mut AttributeVector, definition: &ActivityDefinition) {
    attributes.apply_boosts(definition.boosts);
}
