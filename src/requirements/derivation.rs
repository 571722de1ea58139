//! Requirement derivation pipeline
//!
//! Education gates are not authored per (stage, subject) pair. A single
//! baseline per subject runs through three ordered transforms:
//! escalation, floor enforcement, clamping. All stages are pure; the
//! same inputs always derive the same profile.

use crate::attributes::AttributeId;
use crate::catalog::Job;
use crate::core::config::THRESHOLD_CAP;
use crate::education::{EducationStage, SubjectProfile};
use crate::requirements::base_tables::{subject_baseline, FLOOR_RULES};
use crate::requirements::profile::{AttributeThresholds, RequirementProfile};

/// Uniform increase applied to every non-zero baseline threshold
fn escalation_delta(stage: EducationStage) -> u8 {
    match stage {
        EducationStage::Bachelor => 1,
        EducationStage::Master => 2,
        EducationStage::Doctorate => 3,
        // Vocational is the baseline; pre-tertiary stages never escalate
        _ => 0,
    }
}

/// Minimum education rank gating entry to a tertiary stage
fn minimum_rank(stage: EducationStage) -> u8 {
    match stage {
        EducationStage::Vocational => 3,
        EducationStage::Bachelor => 3,
        EducationStage::Master => 5,
        EducationStage::Doctorate => 6,
        _ => 0,
    }
}

/// Derive the requirement profile for enrolling in (stage, subject)
///
/// Pre-tertiary stages have no subject tables and gate nothing: they
/// yield the open profile. Escalation and enforcement only ever touch
/// thresholds the baseline made non-zero, so an attribute irrelevant to
/// a subject stays irrelevant at every stage.
pub fn derive_education_requirements(
    stage: EducationStage,
    subject: SubjectProfile,
) -> RequirementProfile {
    if !stage.is_tertiary() {
        return RequirementProfile::open();
    }
    let Some(baseline) = subject_baseline(subject) else {
        return RequirementProfile::open();
    };

    let mut thresholds = AttributeThresholds::default();
    for &(id, value) in baseline.essentials.iter().chain(baseline.supporting) {
        thresholds.set(id, value);
    }

    escalate(&mut thresholds, stage);
    enforce_floors(&mut thresholds, stage, subject);
    clamp(&mut thresholds);

    RequirementProfile {
        min_education_rank: minimum_rank(stage),
        thresholds,
        ..RequirementProfile::default()
    }
}

/// Normalize a job's authored requirement block into a profile
///
/// Jobs carry a pre-baked profile in the catalog; this is shape
/// pass-through, not derivation.
pub fn derive_job_requirements(job: &Job) -> RequirementProfile {
    job.requirements.clone()
}

/// Stage 2: add the stage delta to every non-zero threshold, capped
fn escalate(thresholds: &mut AttributeThresholds, stage: EducationStage) {
    let delta = escalation_delta(stage);
    for id in AttributeId::ALL {
        let value = thresholds.get(id);
        if value > 0 {
            thresholds.set(id, (value + delta).min(THRESHOLD_CAP));
        }
    }
}

/// Stage 3: raise already-relevant thresholds to their stage floors
fn enforce_floors(
    thresholds: &mut AttributeThresholds,
    stage: EducationStage,
    subject: SubjectProfile,
) {
    for rule in FLOOR_RULES {
        if !rule.applies(stage, subject) {
            continue;
        }
        let value = thresholds.get(rule.attribute);
        if value > 0 && value < rule.floor {
            thresholds.set(rule.attribute, rule.floor.min(THRESHOLD_CAP));
        }
    }
}

/// Stage 4: final bound on every threshold
fn clamp(thresholds: &mut AttributeThresholds) {
    for id in AttributeId::ALL {
        let value = thresholds.get(id);
        if value > THRESHOLD_CAP {
            thresholds.set(id, THRESHOLD_CAP);
        }
    }
}
