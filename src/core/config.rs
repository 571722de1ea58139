//! Engine constants with documented rationale
//!
//! The numeric rules of the progression engine are collected here with
//! explanations of their purpose and how they interact with each other.

/// Ceiling for any derived attribute threshold
///
/// Escalation and floor enforcement both cap at this value, and the final
/// clamping stage re-applies it. Display layers share the same 0..=5
/// convention for soft skills, but the player's accumulated attributes
/// themselves are unbounded - only *requirements* are capped.
pub const THRESHOLD_CAP: u8 = 5;

/// Largest starting roll for a single attribute at player creation
///
/// New players start with small seeded values (0..=STARTING_ROLL_MAX) so
/// that no fresh player accidentally satisfies a tertiary requirement
/// profile, whose essential thresholds begin at 3.
pub const STARTING_ROLL_MAX: u32 = 2;

/// Highest proficiency rank a hard-skill credential can reach
///
/// Advancing a credential at this rank is a reported no-op, never an
/// error: saturation is an expected end state of normal play.
pub const MAX_PROFICIENCY_RANK: u8 = 3;
