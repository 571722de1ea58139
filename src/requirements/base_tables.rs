//! Hand-authored requirement tables - config data, not logic
//!
//! The per-subject baselines and the stage floors are authored values
//! tuned for gameplay pacing. They live in static tables so they can be
//! audited and tested independently of the derivation pipeline that
//! consumes them.

use crate::attributes::AttributeId;
use crate::education::{EducationStage, SubjectProfile};

/// Base requirement thresholds for one tertiary subject
///
/// Essentials are the core attributes of the field (3..=5); supporting
/// attributes matter but less so (1..=2). Every attribute absent from
/// both lists is irrelevant to the subject and stays at zero through the
/// whole pipeline.
#[derive(Debug, Clone)]
pub struct SubjectBaseline {
    pub subject: SubjectProfile,
    pub essentials: &'static [(AttributeId, u8)],
    pub supporting: &'static [(AttributeId, u8)],
}

/// Baseline table, one entry per subject profile
pub static SUBJECT_BASELINES: &[SubjectBaseline] = &[
    SubjectBaseline {
        subject: SubjectProfile::Business,
        essentials: &[
            (AttributeId::AnalyticalReasoning, 3),
            (AttributeId::Leadership, 3),
            (AttributeId::Planning, 4),
            (AttributeId::SocialCommunication, 3),
        ],
        supporting: &[
            (AttributeId::SelfDiscipline, 2),
            (AttributeId::Storytelling, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Engineering,
        essentials: &[
            (AttributeId::AnalyticalReasoning, 4),
            (AttributeId::AttentionToDetail, 4),
            (AttributeId::SpatialOrientation, 3),
        ],
        supporting: &[
            (AttributeId::Dexterity, 2),
            (AttributeId::Perseverance, 2),
            (AttributeId::Planning, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Health,
        essentials: &[
            (AttributeId::AttentionToDetail, 4),
            (AttributeId::StressResistance, 4),
            (AttributeId::SocialCommunication, 3),
        ],
        supporting: &[
            (AttributeId::Endurance, 2),
            (AttributeId::Teamwork, 2),
            (AttributeId::SelfDiscipline, 2),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Arts,
        essentials: &[
            (AttributeId::CreativeExpression, 5),
            (AttributeId::Dexterity, 3),
        ],
        supporting: &[
            (AttributeId::Storytelling, 2),
            (AttributeId::Courage, 1),
            (AttributeId::Perseverance, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Science,
        essentials: &[
            (AttributeId::AnalyticalReasoning, 4),
            (AttributeId::Perseverance, 4),
            (AttributeId::AttentionToDetail, 3),
        ],
        supporting: &[
            (AttributeId::SelfDiscipline, 2),
            (AttributeId::Planning, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Education,
        essentials: &[
            (AttributeId::SocialCommunication, 4),
            (AttributeId::Storytelling, 3),
            (AttributeId::StressResistance, 3),
        ],
        supporting: &[
            (AttributeId::Planning, 2),
            (AttributeId::Teamwork, 2),
            (AttributeId::Perseverance, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Technology,
        essentials: &[
            (AttributeId::AnalyticalReasoning, 4),
            (AttributeId::AttentionToDetail, 4),
            (AttributeId::Perseverance, 4),
            (AttributeId::SelfDiscipline, 4),
        ],
        supporting: &[
            (AttributeId::Planning, 2),
            (AttributeId::Teamwork, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Sports,
        essentials: &[
            (AttributeId::Endurance, 5),
            (AttributeId::SelfDiscipline, 4),
            (AttributeId::StressResistance, 3),
        ],
        supporting: &[
            (AttributeId::Teamwork, 2),
            (AttributeId::Courage, 2),
            (AttributeId::OutdoorResilience, 2),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Agriculture,
        essentials: &[
            (AttributeId::OutdoorResilience, 4),
            (AttributeId::Endurance, 3),
            (AttributeId::Perseverance, 3),
        ],
        supporting: &[
            (AttributeId::Dexterity, 2),
            (AttributeId::Planning, 1),
            (AttributeId::SpatialOrientation, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Humanities,
        essentials: &[
            (AttributeId::AnalyticalReasoning, 3),
            (AttributeId::Storytelling, 3),
            (AttributeId::Perseverance, 3),
        ],
        supporting: &[
            (AttributeId::CreativeExpression, 2),
            (AttributeId::SelfDiscipline, 2),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Law,
        essentials: &[
            (AttributeId::AnalyticalReasoning, 4),
            (AttributeId::AttentionToDetail, 4),
            (AttributeId::Storytelling, 3),
            (AttributeId::StressResistance, 3),
        ],
        supporting: &[
            (AttributeId::SelfDiscipline, 2),
            (AttributeId::Planning, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Design,
        essentials: &[
            (AttributeId::CreativeExpression, 4),
            (AttributeId::Dexterity, 3),
            (AttributeId::AttentionToDetail, 3),
        ],
        supporting: &[
            (AttributeId::Storytelling, 2),
            (AttributeId::Planning, 1),
            (AttributeId::Teamwork, 1),
        ],
    },
    SubjectBaseline {
        subject: SubjectProfile::Service,
        essentials: &[
            (AttributeId::SocialCommunication, 4),
            (AttributeId::StressResistance, 3),
            (AttributeId::Teamwork, 3),
        ],
        supporting: &[
            (AttributeId::Planning, 2),
            (AttributeId::Courage, 1),
        ],
    },
];

/// Look up the baseline for a subject
pub fn subject_baseline(subject: SubjectProfile) -> Option<&'static SubjectBaseline> {
    SUBJECT_BASELINES.iter().find(|b| b.subject == subject)
}

/// Which subjects a floor rule applies to
#[derive(Debug, Clone, Copy)]
pub enum SubjectScope {
    All,
    Quantitative,
    Subjects(&'static [SubjectProfile]),
}

impl SubjectScope {
    pub fn applies_to(&self, subject: SubjectProfile) -> bool {
        match self {
            Self::All => true,
            Self::Quantitative => subject.is_quantitative(),
            Self::Subjects(subjects) => subjects.contains(&subject),
        }
    }
}

/// Stage/subject-specific minimum applied after escalation
///
/// Floors raise a threshold to at least `floor`, but only where the
/// escalated value is already non-zero: enforcement never activates an
/// attribute the baseline left irrelevant, and never lowers a value.
#[derive(Debug, Clone)]
pub struct FloorRule {
    /// Applies at this stage and every later one
    pub from_stage: EducationStage,
    pub scope: SubjectScope,
    pub attribute: AttributeId,
    pub floor: u8,
}

impl FloorRule {
    pub fn applies(&self, stage: EducationStage, subject: SubjectProfile) -> bool {
        stage.rank() >= self.from_stage.rank() && self.scope.applies_to(subject)
    }
}

/// Floor table, applied in order after escalation
pub static FLOOR_RULES: &[FloorRule] = &[
    FloorRule {
        from_stage: EducationStage::Bachelor,
        scope: SubjectScope::Quantitative,
        attribute: AttributeId::AnalyticalReasoning,
        floor: 3,
    },
    FloorRule {
        from_stage: EducationStage::Master,
        scope: SubjectScope::Quantitative,
        attribute: AttributeId::AnalyticalReasoning,
        floor: 4,
    },
    FloorRule {
        from_stage: EducationStage::Master,
        scope: SubjectScope::Subjects(&[SubjectProfile::Arts, SubjectProfile::Design]),
        attribute: AttributeId::CreativeExpression,
        floor: 4,
    },
    FloorRule {
        from_stage: EducationStage::Master,
        scope: SubjectScope::Subjects(&[SubjectProfile::Arts, SubjectProfile::Design]),
        attribute: AttributeId::Storytelling,
        floor: 4,
    },
    FloorRule {
        from_stage: EducationStage::Doctorate,
        scope: SubjectScope::All,
        attribute: AttributeId::AnalyticalReasoning,
        floor: 4,
    },
    FloorRule {
        from_stage: EducationStage::Doctorate,
        scope: SubjectScope::All,
        attribute: AttributeId::Perseverance,
        floor: 4,
    },
    FloorRule {
        from_stage: EducationStage::Doctorate,
        scope: SubjectScope::All,
        attribute: AttributeId::SelfDiscipline,
        floor: 4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::THRESHOLD_CAP;
    use std::collections::HashSet;

    #[test]
    fn test_every_subject_has_a_baseline() {
        for subject in SubjectProfile::ALL {
            assert!(
                subject_baseline(subject).is_some(),
                "missing baseline for {:?}",
                subject
            );
        }
        assert_eq!(SUBJECT_BASELINES.len(), SubjectProfile::ALL.len());
    }

    #[test]
    fn test_baseline_value_bands() {
        for baseline in SUBJECT_BASELINES {
            for &(_, value) in baseline.essentials {
                assert!(
                    (3..=THRESHOLD_CAP).contains(&value),
                    "{:?}: essential out of band",
                    baseline.subject
                );
            }
            for &(_, value) in baseline.supporting {
                assert!(
                    (1..=2).contains(&value),
                    "{:?}: supporting out of band",
                    baseline.subject
                );
            }
        }
    }

    #[test]
    fn test_baseline_attributes_unique() {
        for baseline in SUBJECT_BASELINES {
            let mut seen = HashSet::new();
            for &(id, _) in baseline.essentials.iter().chain(baseline.supporting) {
                assert!(
                    seen.insert(id),
                    "{:?}: {:?} listed twice",
                    baseline.subject,
                    id
                );
            }
        }
    }

    #[test]
    fn test_floor_rule_stage_gating() {
        let quantitative_floor = &FLOOR_RULES[0];
        assert!(quantitative_floor.applies(EducationStage::Bachelor, SubjectProfile::Science));
        assert!(quantitative_floor.applies(EducationStage::Doctorate, SubjectProfile::Science));
        assert!(!quantitative_floor.applies(EducationStage::Vocational, SubjectProfile::Science));
        assert!(!quantitative_floor.applies(EducationStage::Bachelor, SubjectProfile::Arts));
    }

    #[test]
    fn test_scope_matching() {
        assert!(SubjectScope::All.applies_to(SubjectProfile::Sports));
        assert!(SubjectScope::Quantitative.applies_to(SubjectProfile::Business));
        assert!(!SubjectScope::Quantitative.applies_to(SubjectProfile::Service));
        let arts = SubjectScope::Subjects(&[SubjectProfile::Arts]);
        assert!(arts.applies_to(SubjectProfile::Arts));
        assert!(!arts.applies_to(SubjectProfile::Design));
    }
}
