//! Generic leveled-credential storage
//!
//! One implementation serves all four credential families. A credential
//! is "held" exactly when its identity is a key in the map; the set of
//! held identities is a projection of the key set, not separate storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::credentials::{CredentialIdentity, ProficiencyLevel};

/// Outcome of a single-step advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The credential now sits at this level
    Advanced(ProficiencyLevel),
    /// Already at Level 3; nothing changed
    AtMaximum,
}

/// Mapping from credential identity to proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeveledCredentialSet<I: CredentialIdentity> {
    levels: HashMap<I, ProficiencyLevel>,
}

impl<I: CredentialIdentity> Default for LeveledCredentialSet<I> {
    fn default() -> Self {
        Self {
            levels: HashMap::new(),
        }
    }
}

impl<I: CredentialIdentity> LeveledCredentialSet<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the credential is held at any level
    pub fn holds(&self, id: I) -> bool {
        self.levels.contains_key(&id)
    }

    /// Current level, or None if not held
    pub fn level(&self, id: I) -> Option<ProficiencyLevel> {
        self.levels.get(&id).copied()
    }

    /// Grant at Level 1 if not yet held; never downgrades
    ///
    /// Returns the level held afterwards.
    pub fn grant(&mut self, id: I) -> ProficiencyLevel {
        *self
            .levels
            .entry(id)
            .or_insert(ProficiencyLevel::Level1)
    }

    /// Raise to at least `to`; grants at `to` if not held
    pub fn promote(&mut self, id: I, to: ProficiencyLevel) -> ProficiencyLevel {
        let level = self.levels.entry(id).or_insert(to);
        if to > *level {
            *level = to;
        }
        *level
    }

    /// Move exactly one level toward the maximum
    ///
    /// Absent -> Level 1; at Level 3 this is a reported no-op.
    pub fn advance_one_step(&mut self, id: I) -> AdvanceOutcome {
        match self.levels.get(&id).copied() {
            None => {
                self.levels.insert(id, ProficiencyLevel::Level1);
                AdvanceOutcome::Advanced(ProficiencyLevel::Level1)
            }
            Some(level) => match level.next() {
                Some(next) => {
                    self.levels.insert(id, next);
                    AdvanceOutcome::Advanced(next)
                }
                None => AdvanceOutcome::AtMaximum,
            },
        }
    }

    /// Whether another advance step would change the level
    pub fn can_advance(&self, id: I) -> bool {
        self.level(id) != Some(ProficiencyLevel::MAX)
    }

    /// Remove the credential entirely
    ///
    /// Only explicit player-reset flows call this; normal progression
    /// never lowers or removes a credential. Returns whether it was held.
    pub fn revoke(&mut self, id: I) -> bool {
        self.levels.remove(&id).is_some()
    }

    /// Held identities (the key-set projection)
    pub fn identities(&self) -> impl Iterator<Item = I> + '_ {
        self.levels.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Certification;

    #[test]
    fn test_absent_is_not_held() {
        let set: LeveledCredentialSet<Certification> = LeveledCredentialSet::new();
        assert!(!set.holds(Certification::FirstAid));
        assert_eq!(set.level(Certification::FirstAid), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_grant_is_idempotent_and_never_downgrades() {
        let mut set = LeveledCredentialSet::new();
        assert_eq!(set.grant(Certification::Welding), ProficiencyLevel::Level1);
        set.promote(Certification::Welding, ProficiencyLevel::Level3);
        assert_eq!(set.grant(Certification::Welding), ProficiencyLevel::Level3);
        assert_eq!(set.level(Certification::Welding), Some(ProficiencyLevel::Level3));
    }

    #[test]
    fn test_promote_is_monotonic() {
        let mut set = LeveledCredentialSet::new();
        set.promote(Certification::Accounting, ProficiencyLevel::Level2);
        // Lower target leaves the level alone
        set.promote(Certification::Accounting, ProficiencyLevel::Level1);
        assert_eq!(
            set.level(Certification::Accounting),
            Some(ProficiencyLevel::Level2)
        );
        // Repeating the same call changes nothing
        let before = set.clone();
        set.promote(Certification::Accounting, ProficiencyLevel::Level2);
        assert_eq!(set, before);
    }

    #[test]
    fn test_advance_walks_one_step_at_a_time() {
        let mut set = LeveledCredentialSet::new();
        assert_eq!(
            set.advance_one_step(Certification::DataAnalytics),
            AdvanceOutcome::Advanced(ProficiencyLevel::Level1)
        );
        assert_eq!(
            set.advance_one_step(Certification::DataAnalytics),
            AdvanceOutcome::Advanced(ProficiencyLevel::Level2)
        );
        assert_eq!(
            set.advance_one_step(Certification::DataAnalytics),
            AdvanceOutcome::Advanced(ProficiencyLevel::Level3)
        );
        // Fourth call saturates
        assert_eq!(
            set.advance_one_step(Certification::DataAnalytics),
            AdvanceOutcome::AtMaximum
        );
        assert_eq!(
            set.level(Certification::DataAnalytics),
            Some(ProficiencyLevel::Level3)
        );
    }

    #[test]
    fn test_can_advance() {
        let mut set = LeveledCredentialSet::new();
        assert!(set.can_advance(Certification::FoodSafety));
        set.promote(Certification::FoodSafety, ProficiencyLevel::Level3);
        assert!(!set.can_advance(Certification::FoodSafety));
    }

    #[test]
    fn test_revoke_removes_entry() {
        let mut set = LeveledCredentialSet::new();
        set.grant(Certification::FirstAid);
        assert!(set.revoke(Certification::FirstAid));
        assert!(!set.holds(Certification::FirstAid));
        assert!(!set.revoke(Certification::FirstAid));
    }

    #[test]
    fn test_identities_projection() {
        let mut set = LeveledCredentialSet::new();
        set.grant(Certification::FirstAid);
        set.promote(Certification::Welding, ProficiencyLevel::Level2);
        let mut held: Vec<Certification> = set.identities().collect();
        held.sort_by_key(|c| c.code());
        assert_eq!(held, vec![Certification::FirstAid, Certification::Welding]);
    }
}
