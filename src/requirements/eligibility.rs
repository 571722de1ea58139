//! Eligibility evaluation
//!
//! Every clause of a requirement profile is checked; nothing
//! short-circuits. Failures collect in a stable order (education, then
//! attributes in canonical order, then credentials in kind order) so two
//! runs over the same state produce identical, diff-able output.

use std::fmt;

use crate::attributes::{AttributeId, AttributeVector};
use crate::credentials::{
    CredentialIdentity, CredentialKind, CredentialPortfolio, LeveledCredentialSet,
};
use crate::education::{highest_rank, holds_accepted_subject, Degree, SubjectProfile};
use crate::requirements::profile::RequirementProfile;

/// One failed requirement clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseFailure {
    /// Education rank (and accepted subjects, when present) not satisfied
    Education {
        required_rank: u8,
        achieved_rank: u8,
        accepted_subjects: Option<Vec<SubjectProfile>>,
    },
    /// Attribute below its threshold
    Attribute {
        id: AttributeId,
        required: u8,
        actual: u32,
    },
    /// Required credential not held
    Credential {
        kind: CredentialKind,
        name: &'static str,
    },
}

impl fmt::Display for ClauseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Education {
                required_rank,
                achieved_rank,
                accepted_subjects,
            } => {
                write!(
                    f,
                    "education rank {} required (have {})",
                    required_rank, achieved_rank
                )?;
                if let Some(subjects) = accepted_subjects {
                    let names: Vec<&str> = subjects.iter().map(|s| s.label()).collect();
                    write!(f, " with a degree in one of: {}", names.join(", "))?;
                }
                Ok(())
            }
            Self::Attribute {
                id,
                required,
                actual,
            } => write!(f, "{} {} required (have {})", id.label(), required, actual),
            Self::Credential { kind, name } => {
                write!(f, "{} '{}' required", kind.label(), name)
            }
        }
    }
}

/// Result of evaluating a profile against a player's progress
///
/// `met == false` is the expected, non-exceptional outcome of asking;
/// it is ordinary control flow, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityReport {
    pub met: bool,
    pub unmet: Vec<ClauseFailure>,
}

/// Evaluate every clause of `profile` against the player's progress
pub fn evaluate_eligibility(
    attributes: &AttributeVector,
    credentials: &CredentialPortfolio,
    held_degrees: &[Degree],
    profile: &RequirementProfile,
) -> EligibilityReport {
    let mut unmet = Vec::new();

    // Education clause
    let achieved = highest_rank(held_degrees);
    let mut education_met = achieved >= profile.min_education_rank;
    if education_met {
        if let Some(accepted) = &profile.accepted_subjects {
            if !accepted.is_empty() {
                education_met =
                    holds_accepted_subject(held_degrees, profile.min_education_rank, accepted);
            }
        }
    }
    if !education_met {
        unmet.push(ClauseFailure::Education {
            required_rank: profile.min_education_rank,
            achieved_rank: achieved,
            accepted_subjects: profile.accepted_subjects.clone(),
        });
    }

    // Attribute clauses, canonical order; zero thresholds pass trivially
    for id in AttributeId::ALL {
        let required = profile.thresholds.get(id);
        let actual = attributes.get(id);
        if actual < u32::from(required) {
            unmet.push(ClauseFailure::Attribute {
                id,
                required,
                actual,
            });
        }
    }

    // Credential clauses, kind order then table order within a kind.
    // Presence alone gates; the held level never matters here.
    check_credentials(&profile.required_projects, &credentials.projects, &mut unmet);
    check_credentials(
        &profile.required_certifications,
        &credentials.certifications,
        &mut unmet,
    );
    check_credentials(&profile.required_software, &credentials.software, &mut unmet);
    check_credentials(&profile.required_licenses, &credentials.licenses, &mut unmet);

    EligibilityReport {
        met: unmet.is_empty(),
        unmet,
    }
}

fn check_credentials<I: CredentialIdentity>(
    required: &[I],
    held: &LeveledCredentialSet<I>,
    unmet: &mut Vec<ClauseFailure>,
) {
    for &id in required {
        if !held.holds(id) {
            unmet.push(ClauseFailure::Credential {
                kind: I::KIND,
                name: id.label(),
            });
        }
    }
}

/// How many relevant soft-skill clauses the player already satisfies
///
/// Informational only, for display next to a listing; the eligibility
/// gate never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpfulnessScore {
    pub satisfied: usize,
    pub relevant: usize,
}

impl HelpfulnessScore {
    /// Fraction satisfied (1.0 when no attribute is relevant)
    pub fn ratio(&self) -> f32 {
        if self.relevant == 0 {
            return 1.0;
        }
        self.satisfied as f32 / self.relevant as f32
    }
}

pub fn helpfulness_score(
    attributes: &AttributeVector,
    profile: &RequirementProfile,
) -> HelpfulnessScore {
    let mut satisfied = 0;
    let mut relevant = 0;
    for (id, required) in profile.thresholds.relevant() {
        relevant += 1;
        if attributes.get(id) >= u32::from(required) {
            satisfied += 1;
        }
    }
    HelpfulnessScore {
        satisfied,
        relevant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Certification;
    use crate::education::EducationStage;
    use crate::requirements::derivation::derive_education_requirements;

    fn qualified_for(profile: &RequirementProfile) -> (AttributeVector, CredentialPortfolio, Vec<Degree>) {
        let mut attributes = AttributeVector::new();
        for (id, required) in profile.thresholds.relevant() {
            attributes.set(id, u32::from(required));
        }
        let mut credentials = CredentialPortfolio::new();
        for &c in &profile.required_certifications {
            credentials.certifications.grant(c);
        }
        let degrees = vec![
            Degree::pre_tertiary(EducationStage::HighSchool).unwrap(),
            Degree::tertiary(EducationStage::Bachelor, SubjectProfile::Technology).unwrap(),
            Degree::tertiary(EducationStage::Master, SubjectProfile::Technology).unwrap(),
        ];
        (attributes, credentials, degrees)
    }

    #[test]
    fn test_met_iff_no_unmet_reasons() {
        let profile =
            derive_education_requirements(EducationStage::Bachelor, SubjectProfile::Technology);
        let (attributes, credentials, degrees) = qualified_for(&profile);

        let report = evaluate_eligibility(&attributes, &credentials, &degrees, &profile);
        assert!(report.met);
        assert!(report.unmet.is_empty());

        // Lower one satisfied attribute clause: met flips and exactly that
        // clause appears
        let mut weakened = attributes.clone();
        weakened.set(AttributeId::Perseverance, 0);
        let report = evaluate_eligibility(&weakened, &credentials, &degrees, &profile);
        assert!(!report.met);
        assert_eq!(report.unmet.len(), 1);
        assert_eq!(
            report.unmet[0],
            ClauseFailure::Attribute {
                id: AttributeId::Perseverance,
                required: 5,
                actual: 0
            }
        );
    }

    #[test]
    fn test_failure_order_is_stable() {
        let mut profile =
            derive_education_requirements(EducationStage::Bachelor, SubjectProfile::Technology);
        profile.required_certifications.push(Certification::DataAnalytics);

        let report = evaluate_eligibility(
            &AttributeVector::new(),
            &CredentialPortfolio::new(),
            &[],
            &profile,
        );
        assert!(!report.met);
        // Education first
        assert!(matches!(report.unmet[0], ClauseFailure::Education { .. }));
        // Credentials last
        assert!(matches!(
            report.unmet.last(),
            Some(ClauseFailure::Credential { .. })
        ));
        // Attribute failures follow canonical order
        let attribute_ids: Vec<AttributeId> = report
            .unmet
            .iter()
            .filter_map(|failure| match failure {
                ClauseFailure::Attribute { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        let expected: Vec<AttributeId> = AttributeId::ALL
            .into_iter()
            .filter(|&id| profile.thresholds.get(id) > 0)
            .collect();
        assert_eq!(attribute_ids, expected);
    }

    #[test]
    fn test_zero_thresholds_pass_trivially() {
        let report = evaluate_eligibility(
            &AttributeVector::new(),
            &CredentialPortfolio::new(),
            &[],
            &RequirementProfile::open(),
        );
        assert!(report.met);
    }

    #[test]
    fn test_accepted_subjects_restrict_education_clause() {
        let mut profile = RequirementProfile::open();
        profile.min_education_rank = 5;
        profile.accepted_subjects =
            Some(vec![SubjectProfile::Health, SubjectProfile::Science]);

        // Engineering Bachelor satisfies the rank but not the subject list
        let degrees =
            vec![Degree::tertiary(EducationStage::Bachelor, SubjectProfile::Engineering).unwrap()];
        let report = evaluate_eligibility(
            &AttributeVector::new(),
            &CredentialPortfolio::new(),
            &degrees,
            &profile,
        );
        assert!(!report.met);
        assert!(matches!(report.unmet[0], ClauseFailure::Education { .. }));

        let degrees =
            vec![Degree::tertiary(EducationStage::Bachelor, SubjectProfile::Science).unwrap()];
        let report = evaluate_eligibility(
            &AttributeVector::new(),
            &CredentialPortfolio::new(),
            &degrees,
            &profile,
        );
        assert!(report.met);
    }

    #[test]
    fn test_credential_level_is_irrelevant_to_eligibility() {
        let mut profile = RequirementProfile::open();
        profile.required_certifications.push(Certification::FirstAid);

        let mut credentials = CredentialPortfolio::new();
        credentials.certifications.grant(Certification::FirstAid);
        let report = evaluate_eligibility(
            &AttributeVector::new(),
            &credentials,
            &[],
            &profile,
        );
        assert!(report.met);
    }

    #[test]
    fn test_removing_credential_flips_met() {
        let mut profile = RequirementProfile::open();
        profile.required_certifications.push(Certification::Welding);

        let mut credentials = CredentialPortfolio::new();
        credentials.certifications.grant(Certification::Welding);
        assert!(
            evaluate_eligibility(&AttributeVector::new(), &credentials, &[], &profile).met
        );

        credentials.certifications.revoke(Certification::Welding);
        let report = evaluate_eligibility(&AttributeVector::new(), &credentials, &[], &profile);
        assert!(!report.met);
        assert_eq!(report.unmet.len(), 1);
        assert!(matches!(
            report.unmet[0],
            ClauseFailure::Credential {
                kind: CredentialKind::Certification,
                ..
            }
        ));
    }

    #[test]
    fn test_helpfulness_score_never_gates() {
        let profile =
            derive_education_requirements(EducationStage::Bachelor, SubjectProfile::Arts);
        let mut attributes = AttributeVector::new();
        attributes.set(AttributeId::CreativeExpression, 5);

        let score = helpfulness_score(&attributes, &profile);
        assert!(score.satisfied >= 1);
        assert!(score.satisfied < score.relevant);
        assert!(score.ratio() > 0.0 && score.ratio() < 1.0);

        // A partial score changes nothing about the gate itself
        let report = evaluate_eligibility(
            &attributes,
            &CredentialPortfolio::new(),
            &[],
            &profile,
        );
        assert!(!report.met);
    }

    #[test]
    fn test_failure_messages_are_readable() {
        let failure = ClauseFailure::Attribute {
            id: AttributeId::AnalyticalReasoning,
            required: 4,
            actual: 1,
        };
        assert_eq!(failure.to_string(), "analytical reasoning 4 required (have 1)");

        let failure = ClauseFailure::Education {
            required_rank: 5,
            achieved_rank: 3,
            accepted_subjects: Some(vec![SubjectProfile::Health]),
        };
        assert_eq!(
            failure.to_string(),
            "education rank 5 required (have 3) with a degree in one of: health"
        );
    }
}
