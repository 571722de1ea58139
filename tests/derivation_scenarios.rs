//! Integration test: Requirement Derivation
//!
//! Walks the derivation pipeline across stages and subjects and checks
//! the escalation and clamping guarantees the rest of the game relies on.

use lifepath::attributes::AttributeId;
use lifepath::education::{EducationStage, SubjectProfile};
use lifepath::requirements::{derive_education_requirements, RequirementProfile};

#[test]
fn bachelor_technology_hits_the_cap() {
    // Technology's four essentials sit at 4 in the baseline; Bachelor
    // escalation (+1) pushes each to 5, where the cap holds them
    let profile =
        derive_education_requirements(EducationStage::Bachelor, SubjectProfile::Technology);

    for id in [
        AttributeId::AnalyticalReasoning,
        AttributeId::AttentionToDetail,
        AttributeId::Perseverance,
        AttributeId::SelfDiscipline,
    ] {
        assert_eq!(profile.thresholds.get(id), 5, "{:?}", id);
    }
    assert_eq!(profile.min_education_rank, 3);
}

#[test]
fn master_arts_keeps_creative_cap_and_floors_storytelling() {
    let profile = derive_education_requirements(EducationStage::Master, SubjectProfile::Arts);

    assert_eq!(profile.thresholds.get(AttributeId::CreativeExpression), 5);
    assert!(profile.thresholds.get(AttributeId::Storytelling) >= 4);
    assert_eq!(profile.min_education_rank, 5);
}

#[test]
fn escalation_is_monotonic_and_never_promotes_zero() {
    let ladder = [
        EducationStage::Vocational,
        EducationStage::Bachelor,
        EducationStage::Master,
        EducationStage::Doctorate,
    ];

    for subject in SubjectProfile::ALL {
        let base = derive_education_requirements(EducationStage::Vocational, subject);
        let mut previous: Option<lifepath::requirements::RequirementProfile> = None;

        for stage in ladder {
            let derived = derive_education_requirements(stage, subject);
            for id in AttributeId::ALL {
                // In range
                assert!(derived.thresholds.get(id) <= 5);
                // Irrelevant attributes stay irrelevant at every stage
                if base.thresholds.get(id) == 0 {
                    assert_eq!(derived.thresholds.get(id), 0);
                }
                // Non-decreasing along the ladder
                if let Some(prev) = &previous {
                    assert!(
                        derived.thresholds.get(id) >= prev.thresholds.get(id),
                        "{:?}/{:?} regressed at {:?}",
                        subject,
                        id,
                        stage
                    );
                }
            }
            previous = Some(derived);
        }
    }
}

#[test]
fn minimum_rank_constants_per_stage() {
    for subject in SubjectProfile::ALL {
        assert_eq!(
            derive_education_requirements(EducationStage::Vocational, subject).min_education_rank,
            3
        );
        assert_eq!(
            derive_education_requirements(EducationStage::Bachelor, subject).min_education_rank,
            3
        );
        assert_eq!(
            derive_education_requirements(EducationStage::Master, subject).min_education_rank,
            5
        );
        assert_eq!(
            derive_education_requirements(EducationStage::Doctorate, subject).min_education_rank,
            6
        );
    }
}

#[test]
fn pre_tertiary_stages_gate_nothing() {
    for stage in [
        EducationStage::PrimarySchool,
        EducationStage::MiddleSchool,
        EducationStage::HighSchool,
    ] {
        for subject in SubjectProfile::ALL {
            assert_eq!(
                derive_education_requirements(stage, subject),
                RequirementProfile::open()
            );
        }
    }
}

#[test]
fn education_profiles_require_no_credentials() {
    for subject in SubjectProfile::ALL {
        for stage in EducationStage::TERTIARY {
            let profile = derive_education_requirements(stage, subject);
            assert!(profile.required_projects.is_empty());
            assert!(profile.required_certifications.is_empty());
            assert!(profile.required_software.is_empty());
            assert!(profile.required_licenses.is_empty());
            assert!(profile.accepted_subjects.is_none());
        }
    }
}
