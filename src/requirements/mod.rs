//! Requirement profiles: derivation and eligibility
//!
//! The gate for any unlock - an education stage, a job listing, a
//! training - is a requirement profile. Education profiles are derived
//! from per-subject baselines through escalation, floor enforcement and
//! clamping; job profiles are authored in the catalog and normalized
//! into the same shape. One evaluator checks them all.

pub mod base_tables;
pub mod derivation;
pub mod eligibility;
pub mod profile;

pub use base_tables::{subject_baseline, FloorRule, SubjectBaseline, SubjectScope, FLOOR_RULES, SUBJECT_BASELINES};
pub use derivation::{derive_education_requirements, derive_job_requirements};
pub use eligibility::{
    evaluate_eligibility, helpfulness_score, ClauseFailure, EligibilityReport, HelpfulnessScore,
};
pub use profile::{AttributeThresholds, RequirementProfile};
