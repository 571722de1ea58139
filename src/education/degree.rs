//! Earned education credentials and the transition rules between stages

use serde::{Deserialize, Serialize};

use crate::core::error::{LifepathError, Result};
use crate::education::{EducationStage, SubjectProfile};

/// One earned education credential
///
/// Identity is the (stage, subject) pair. Pre-tertiary degrees carry no
/// subject; tertiary degrees always do. Immutable once earned and never
/// removed from the held list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Degree {
    stage: EducationStage,
    subject: Option<SubjectProfile>,
}

impl Degree {
    /// Pre-tertiary degree (no subject applies)
    pub fn pre_tertiary(stage: EducationStage) -> Result<Self> {
        if stage.is_tertiary() {
            return Err(LifepathError::InvalidDegree(format!(
                "{} requires a subject profile",
                stage.label()
            )));
        }
        Ok(Self {
            stage,
            subject: None,
        })
    }

    /// Tertiary degree in a subject
    pub fn tertiary(stage: EducationStage, subject: SubjectProfile) -> Result<Self> {
        if !stage.is_tertiary() {
            return Err(LifepathError::InvalidDegree(format!(
                "{} does not carry a subject profile",
                stage.label()
            )));
        }
        Ok(Self {
            stage,
            subject: Some(subject),
        })
    }

    pub fn stage(&self) -> EducationStage {
        self.stage
    }

    pub fn subject(&self) -> Option<SubjectProfile> {
        self.subject
    }

    /// EQF-like rank of this degree
    pub fn rank(&self) -> u8 {
        self.stage.rank()
    }
}

/// Highest EQF-like rank among held degrees (0 with none held)
pub fn highest_rank(held: &[Degree]) -> u8 {
    held.iter().map(|d| d.rank()).max().unwrap_or(0)
}

/// Whether some held degree at or above `min_rank` is in one of the
/// accepted subjects
pub fn holds_accepted_subject(
    held: &[Degree],
    min_rank: u8,
    accepted: &[SubjectProfile],
) -> bool {
    held.iter().any(|degree| {
        degree.rank() >= min_rank
            && degree
                .subject()
                .map_or(false, |subject| accepted.contains(&subject))
    })
}

/// Enumerate the educations the player may enroll in next
///
/// Applies the transition rules: the pre-tertiary ladder runs in order;
/// Vocational and Bachelor open up after high school (Vocational only for
/// subjects with a vocational track); Master requires a Bachelor in the
/// same subject; Doctorate requires a Master in the same subject.
/// Already-earned pairs are never offered again.
pub fn available_next_educations(held: &[Degree]) -> Vec<Degree> {
    let mut options = Vec::new();
    let has_stage =
        |stage: EducationStage| held.iter().any(|d| d.stage() == stage);
    let has_tertiary = |stage: EducationStage, subject: SubjectProfile| {
        held.iter()
            .any(|d| d.stage() == stage && d.subject() == Some(subject))
    };

    // Pre-tertiary ladder
    if !has_stage(EducationStage::PrimarySchool) {
        options.push(Degree {
            stage: EducationStage::PrimarySchool,
            subject: None,
        });
        return options;
    }
    if !has_stage(EducationStage::MiddleSchool) {
        options.push(Degree {
            stage: EducationStage::MiddleSchool,
            subject: None,
        });
        return options;
    }
    if !has_stage(EducationStage::HighSchool) {
        options.push(Degree {
            stage: EducationStage::HighSchool,
            subject: None,
        });
        return options;
    }

    for subject in SubjectProfile::ALL {
        if subject.vocational_eligible() && !has_tertiary(EducationStage::Vocational, subject) {
            options.push(Degree {
                stage: EducationStage::Vocational,
                subject: Some(subject),
            });
        }
        if !has_tertiary(EducationStage::Bachelor, subject) {
            options.push(Degree {
                stage: EducationStage::Bachelor,
                subject: Some(subject),
            });
        }
        if has_tertiary(EducationStage::Bachelor, subject)
            && !has_tertiary(EducationStage::Master, subject)
        {
            options.push(Degree {
                stage: EducationStage::Master,
                subject: Some(subject),
            });
        }
        if has_tertiary(EducationStage::Master, subject)
            && !has_tertiary(EducationStage::Doctorate, subject)
        {
            options.push(Degree {
                stage: EducationStage::Doctorate,
                subject: Some(subject),
            });
        }
    }

    options
}
