//! Player career state and yearly progression operations

pub mod activities;
pub mod state;

pub use activities::{activity_definition, apply_activity, ActivityDefinition, ActivityId, ACTIVITY_LIBRARY};
pub use state::CareerState;
