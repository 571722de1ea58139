//! Load job catalog documents
//!
//! Catalogs are JSON-shaped and tolerant of partial failure: a malformed
//! entry or an unknown subject code drops that entry with a warning and
//! the rest of the catalog loads. Unknown credential codes inside an
//! otherwise valid entry drop just that code. Version 1 documents (the
//! legacy compact integer scale) are adapted into the canonical shape
//! before the engine sees them.

use ahash::AHashMap;
use serde_json::Value;

use crate::attributes::AttributeId;
use crate::catalog::job::{Job, JobId};
use crate::core::config::THRESHOLD_CAP;
use crate::core::error::{LifepathError, Result};
use crate::credentials::{Certification, LicenseKind, ProjectType, SoftwareSkill};
use crate::education::SubjectProfile;
use crate::requirements::base_tables::subject_baseline;
use crate::requirements::{AttributeThresholds, RequirementProfile};

/// Rank ceiling in catalog data (EQF-like, Doctorate)
const MAX_EDUCATION_RANK: u8 = 7;

/// Top of the legacy v1 requirement scale
const LEGACY_SCALE_MAX: u8 = 8;

/// Loaded job catalog
#[derive(Debug, Default)]
pub struct Catalog {
    jobs: AHashMap<JobId, Job>,
    /// Entries rejected during load
    pub dropped: u32,
}

impl Catalog {
    pub fn get(&self, id: &JobId) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Parse a catalog document
///
/// Fails only when the document itself is not valid JSON; individual
/// entries fail soft.
pub fn load_catalog(content: &str) -> Result<Catalog> {
    let doc: Value = serde_json::from_str(content)?;
    let version = doc.get("version").and_then(|v| v.as_u64()).unwrap_or(2) as u32;

    let mut catalog = Catalog::default();
    let Some(entries) = doc.get("jobs").and_then(|v| v.as_array()) else {
        return Ok(catalog);
    };

    for entry in entries {
        let parsed = match version {
            1 => parse_job_v1(entry),
            _ => parse_job(entry, version),
        };
        match parsed {
            Ok(job) => {
                catalog.jobs.insert(job.id.clone(), job);
            }
            Err(err) => {
                tracing::warn!("Dropping catalog entry: {}", err);
                catalog.dropped += 1;
            }
        }
    }

    tracing::info!(
        "Loaded {} jobs from catalog v{} ({} dropped)",
        catalog.len(),
        version,
        catalog.dropped
    );
    Ok(catalog)
}

fn required_str<'a>(value: &'a Value, field: &str, id: &str) -> Result<&'a str> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| LifepathError::MalformedEntry(format!("{}: missing {}", id, field)))
}

fn required_u64(value: &Value, field: &str, id: &str) -> Result<u64> {
    value
        .get(field)
        .and_then(|v| v.as_u64())
        .ok_or_else(|| LifepathError::MalformedEntry(format!("{}: missing {}", id, field)))
}

fn parse_category(value: &Value, id: &str) -> Result<SubjectProfile> {
    let code = required_str(value, "category", id)?;
    SubjectProfile::from_code(code)
        .ok_or_else(|| LifepathError::UnknownSubject(format!("{}: '{}'", id, code)))
}

/// Parse a current-shape job entry
fn parse_job(value: &Value, version: u32) -> Result<Job> {
    let id = value
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| LifepathError::MalformedEntry("job missing id".to_string()))?
        .to_string();

    let title = required_str(value, "title", &id)?.to_string();
    let category = parse_category(value, &id)?;
    let annual_income = required_u64(value, "income", &id)? as u32;

    let requirements_value = value.get("requirements").ok_or_else(|| {
        LifepathError::MalformedEntry(format!("{}: missing requirements", id))
    })?;
    let requirements = parse_requirements(requirements_value, &id)?;

    Ok(Job {
        id: JobId::new(id),
        title,
        category,
        annual_income,
        requirements,
        version,
    })
}

fn parse_requirements(value: &Value, job_id: &str) -> Result<RequirementProfile> {
    let min_education_rank = required_u64(value, "min_education_rank", job_id)?
        .min(u64::from(MAX_EDUCATION_RANK)) as u8;

    let accepted_subjects = match value.get("accepted_subjects").and_then(|v| v.as_array()) {
        Some(codes) => {
            let mut subjects = Vec::new();
            for code in codes {
                let Some(code) = code.as_str() else { continue };
                match SubjectProfile::from_code(code) {
                    Some(subject) => subjects.push(subject),
                    None => {
                        tracing::warn!(
                            "{}: {}",
                            job_id,
                            LifepathError::UnknownSubject(code.to_string())
                        );
                    }
                }
            }
            Some(subjects)
        }
        None => None,
    };

    let mut thresholds = AttributeThresholds::default();
    if let Some(entries) = value.get("attributes").and_then(|v| v.as_object()) {
        for (code, level) in entries {
            let Some(id) = AttributeId::from_code(code) else {
                tracing::warn!("{}: dropping unknown attribute code '{}'", job_id, code);
                continue;
            };
            let level = level.as_u64().ok_or_else(|| {
                LifepathError::MalformedEntry(format!(
                    "{}: attribute '{}' is not a number",
                    job_id, code
                ))
            })?;
            thresholds.set(id, level.min(u64::from(THRESHOLD_CAP)) as u8);
        }
    }

    let credentials = value.get("credentials");
    let required_projects = parse_codes(credentials, "projects", job_id, ProjectType::from_code);
    let required_certifications =
        parse_codes(credentials, "certifications", job_id, Certification::from_code);
    let required_software =
        parse_codes(credentials, "software", job_id, SoftwareSkill::from_code);
    let required_licenses = parse_codes(credentials, "licenses", job_id, LicenseKind::from_code);

    Ok(RequirementProfile {
        min_education_rank,
        accepted_subjects,
        thresholds,
        required_projects,
        required_certifications,
        required_software,
        required_licenses,
    })
}

/// Parse one credential-code list, dropping unknown codes with a warning
fn parse_codes<T>(
    credentials: Option<&Value>,
    key: &str,
    job_id: &str,
    parse: fn(&str) -> Option<T>,
) -> Vec<T> {
    let mut out = Vec::new();
    let Some(codes) = credentials
        .and_then(|v| v.get(key))
        .and_then(|v| v.as_array())
    else {
        return out;
    };
    for code in codes {
        let Some(code) = code.as_str() else { continue };
        match parse(code) {
            Some(id) => out.push(id),
            None => {
                tracing::warn!(
                    "{}: {}",
                    job_id,
                    LifepathError::UnknownCredential(code.to_string())
                );
            }
        }
    }
    out
}

/// Adapt a legacy v1 entry into the canonical shape
///
/// v1 carried a single `education` rank and a single `skill_floor`, both
/// on a 0..=8 scale. The rank maps directly onto the EQF-like scale; the
/// skill floor is rescaled to 0..=5 and applied to the essential
/// attributes of the job's subject category.
fn parse_job_v1(value: &Value) -> Result<Job> {
    let id = value
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| LifepathError::MalformedEntry("v1 job missing id".to_string()))?
        .to_string();

    let title = required_str(value, "title", &id)?.to_string();
    let category = parse_category(value, &id)?;
    let annual_income = required_u64(value, "income", &id)? as u32;

    let education =
        required_u64(value, "education", &id)?.min(u64::from(LEGACY_SCALE_MAX)) as u8;
    let skill_floor =
        required_u64(value, "skill_floor", &id)?.min(u64::from(LEGACY_SCALE_MAX)) as u8;

    // Rescale 0..=8 onto the 0..=5 threshold scale, rounding to nearest
    let scaled = (u16::from(skill_floor) * u16::from(THRESHOLD_CAP)
        + u16::from(LEGACY_SCALE_MAX) / 2)
        / u16::from(LEGACY_SCALE_MAX);
    let scaled = scaled as u8;

    let mut thresholds = AttributeThresholds::default();
    if scaled > 0 {
        if let Some(baseline) = subject_baseline(category) {
            for &(attribute, _) in baseline.essentials {
                thresholds.set(attribute, scaled);
            }
        }
    }

    Ok(Job {
        id: JobId::new(id),
        title,
        category,
        annual_income,
        requirements: RequirementProfile {
            min_education_rank: education.min(MAX_EDUCATION_RANK),
            thresholds,
            ..RequirementProfile::default()
        },
        version: 1,
    })
}
