//! Job listings from the static catalog
//!
//! Jobs are consumed, not owned: loaded once from catalog data and
//! immutable afterwards. Their requirement block is authored directly in
//! the document and normalized into the canonical profile shape at load
//! time, so the engine never sees a legacy format.

use serde::{Deserialize, Serialize};

use crate::education::SubjectProfile;
use crate::requirements::RequirementProfile;

/// Stable identifier for a job listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// One job listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub category: SubjectProfile,
    pub annual_income: u32,
    pub requirements: RequirementProfile,
    /// Catalog document version this entry was loaded from
    pub version: u32,
}
