//! Per-player career progression state
//!
//! The engine holds no process-wide state: one CareerState is owned by
//! the caller (one in-memory player session) and mutated only through
//! the documented operations, once per simulated year.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeVector;
use crate::core::types::PlayerId;
use crate::credentials::CredentialPortfolio;
use crate::education::{available_next_educations, highest_rank, Degree};
use crate::requirements::{evaluate_eligibility, EligibilityReport, RequirementProfile};

/// Everything the engine tracks for one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerState {
    pub id: PlayerId,
    pub attributes: AttributeVector,
    pub credentials: CredentialPortfolio,
    degrees: Vec<Degree>,
}

impl CareerState {
    /// New player with seeded starting attribute rolls
    ///
    /// Deterministic given the seed.
    pub fn new_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self {
            id: PlayerId::new(),
            attributes: AttributeVector::starting_roll(&mut rng),
            credentials: CredentialPortfolio::new(),
            degrees: Vec::new(),
        }
    }

    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Record a completed education
    ///
    /// Degrees are immutable once earned and never removed; completing
    /// the same pair twice is a no-op.
    pub fn complete_education(&mut self, degree: Degree) {
        if !self.degrees.contains(&degree) {
            self.degrees.push(degree);
        }
    }

    /// Highest EQF-like rank among held degrees (0 with none)
    pub fn highest_education_rank(&self) -> u8 {
        highest_rank(&self.degrees)
    }

    /// Educations this player may enroll in next
    pub fn available_next_educations(&self) -> Vec<Degree> {
        available_next_educations(&self.degrees)
    }

    /// Evaluate a requirement profile against this player
    pub fn evaluate(&self, profile: &RequirementProfile) -> EligibilityReport {
        evaluate_eligibility(&self.attributes, &self.credentials, &self.degrees, profile)
    }

    /// Explicit player reset: drop every credential
    ///
    /// The only flow that revokes credentials. Attributes and degrees
    /// survive a reset.
    pub fn reset_credentials(&mut self) {
        let dropped = self.credentials.total_held();
        self.credentials.clear();
        tracing::info!("Player reset: revoked {} credentials", dropped);
    }
}
