//! Credential kinds and their closed identity enumerations
//!
//! Each of the four credential families has a fixed set of identities
//! known at compile time. Catalog documents refer to them by stable
//! string codes; anything outside these sets is a load-time config error,
//! never a runtime state.

use serde::{Deserialize, Serialize};

/// The four hard-skill credential families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKind {
    PortfolioProject,
    Certification,
    Software,
    License,
}

impl CredentialKind {
    /// Human-readable name for reports and reasons
    pub fn label(&self) -> &'static str {
        match self {
            Self::PortfolioProject => "portfolio project",
            Self::Certification => "certification",
            Self::Software => "software",
            Self::License => "license",
        }
    }
}

/// Closed identity enumeration for one credential kind
pub trait CredentialIdentity: Copy + Eq + std::hash::Hash {
    const KIND: CredentialKind;

    /// Human-readable name for reports and reasons
    fn label(&self) -> &'static str;
}

/// Portfolio project types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    OpenSourceContribution,
    ResearchPaper,
    ArtPortfolio,
    BusinessPlan,
    MobileApp,
    CommunityEvent,
    ScienceFairEntry,
    ShortFilm,
    RoboticsBuild,
}

impl ProjectType {
    pub const ALL: [ProjectType; 9] = [
        ProjectType::OpenSourceContribution,
        ProjectType::ResearchPaper,
        ProjectType::ArtPortfolio,
        ProjectType::BusinessPlan,
        ProjectType::MobileApp,
        ProjectType::CommunityEvent,
        ProjectType::ScienceFairEntry,
        ProjectType::ShortFilm,
        ProjectType::RoboticsBuild,
    ];

    /// Stable catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Self::OpenSourceContribution => "open_source_contribution",
            Self::ResearchPaper => "research_paper",
            Self::ArtPortfolio => "art_portfolio",
            Self::BusinessPlan => "business_plan",
            Self::MobileApp => "mobile_app",
            Self::CommunityEvent => "community_event",
            Self::ScienceFairEntry => "science_fair_entry",
            Self::ShortFilm => "short_film",
            Self::RoboticsBuild => "robotics_build",
        }
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }
}

impl CredentialIdentity for ProjectType {
    const KIND: CredentialKind = CredentialKind::PortfolioProject;

    fn label(&self) -> &'static str {
        match self {
            Self::OpenSourceContribution => "open source contribution",
            Self::ResearchPaper => "research paper",
            Self::ArtPortfolio => "art portfolio",
            Self::BusinessPlan => "business plan",
            Self::MobileApp => "mobile app",
            Self::CommunityEvent => "community event",
            Self::ScienceFairEntry => "science fair entry",
            Self::ShortFilm => "short film",
            Self::RoboticsBuild => "robotics build",
        }
    }
}

/// Named certifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certification {
    ProjectManagement,
    DataAnalytics,
    Accounting,
    FirstAid,
    FoodSafety,
    ItSecurity,
    CloudInfrastructure,
    DigitalMarketing,
    ForeignLanguage,
    Welding,
    ElectricalSafety,
    MachineOperation,
    FitnessInstruction,
    ChildCare,
    GraphicDesign,
    LabTechniques,
}

impl Certification {
    pub const ALL: [Certification; 16] = [
        Certification::ProjectManagement,
        Certification::DataAnalytics,
        Certification::Accounting,
        Certification::FirstAid,
        Certification::FoodSafety,
        Certification::ItSecurity,
        Certification::CloudInfrastructure,
        Certification::DigitalMarketing,
        Certification::ForeignLanguage,
        Certification::Welding,
        Certification::ElectricalSafety,
        Certification::MachineOperation,
        Certification::FitnessInstruction,
        Certification::ChildCare,
        Certification::GraphicDesign,
        Certification::LabTechniques,
    ];

    /// Stable catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectManagement => "project_management",
            Self::DataAnalytics => "data_analytics",
            Self::Accounting => "accounting",
            Self::FirstAid => "first_aid",
            Self::FoodSafety => "food_safety",
            Self::ItSecurity => "it_security",
            Self::CloudInfrastructure => "cloud_infrastructure",
            Self::DigitalMarketing => "digital_marketing",
            Self::ForeignLanguage => "foreign_language",
            Self::Welding => "welding",
            Self::ElectricalSafety => "electrical_safety",
            Self::MachineOperation => "machine_operation",
            Self::FitnessInstruction => "fitness_instruction",
            Self::ChildCare => "child_care",
            Self::GraphicDesign => "graphic_design",
            Self::LabTechniques => "lab_techniques",
        }
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }
}

impl CredentialIdentity for Certification {
    const KIND: CredentialKind = CredentialKind::Certification;

    fn label(&self) -> &'static str {
        match self {
            Self::ProjectManagement => "project management",
            Self::DataAnalytics => "data analytics",
            Self::Accounting => "accounting",
            Self::FirstAid => "first aid",
            Self::FoodSafety => "food safety",
            Self::ItSecurity => "IT security",
            Self::CloudInfrastructure => "cloud infrastructure",
            Self::DigitalMarketing => "digital marketing",
            Self::ForeignLanguage => "foreign language",
            Self::Welding => "welding",
            Self::ElectricalSafety => "electrical safety",
            Self::MachineOperation => "machine operation",
            Self::FitnessInstruction => "fitness instruction",
            Self::ChildCare => "child care",
            Self::GraphicDesign => "graphic design",
            Self::LabTechniques => "lab techniques",
        }
    }
}

/// Software packages and tool families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoftwareSkill {
    Spreadsheets,
    WordProcessing,
    PresentationTools,
    ImageEditing,
    VideoEditing,
    CadModeling,
    SourceControl,
    DatabaseQueries,
    StatisticsPackages,
    ProjectTracking,
}

impl SoftwareSkill {
    pub const ALL: [SoftwareSkill; 10] = [
        SoftwareSkill::Spreadsheets,
        SoftwareSkill::WordProcessing,
        SoftwareSkill::PresentationTools,
        SoftwareSkill::ImageEditing,
        SoftwareSkill::VideoEditing,
        SoftwareSkill::CadModeling,
        SoftwareSkill::SourceControl,
        SoftwareSkill::DatabaseQueries,
        SoftwareSkill::StatisticsPackages,
        SoftwareSkill::ProjectTracking,
    ];

    /// Stable catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spreadsheets => "spreadsheets",
            Self::WordProcessing => "word_processing",
            Self::PresentationTools => "presentation_tools",
            Self::ImageEditing => "image_editing",
            Self::VideoEditing => "video_editing",
            Self::CadModeling => "cad_modeling",
            Self::SourceControl => "source_control",
            Self::DatabaseQueries => "database_queries",
            Self::StatisticsPackages => "statistics_packages",
            Self::ProjectTracking => "project_tracking",
        }
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }
}

impl CredentialIdentity for SoftwareSkill {
    const KIND: CredentialKind = CredentialKind::Software;

    fn label(&self) -> &'static str {
        match self {
            Self::Spreadsheets => "spreadsheets",
            Self::WordProcessing => "word processing",
            Self::PresentationTools => "presentation tools",
            Self::ImageEditing => "image editing",
            Self::VideoEditing => "video editing",
            Self::CadModeling => "CAD modeling",
            Self::SourceControl => "source control",
            Self::DatabaseQueries => "database queries",
            Self::StatisticsPackages => "statistics packages",
            Self::ProjectTracking => "project tracking",
        }
    }
}

/// Licenses issued by an authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseKind {
    Driving,
    CommercialDriving,
    ForkliftOperation,
    Nursing,
    Teaching,
    LawPractice,
    MedicalPractice,
    RealEstate,
    PrivatePilot,
}

impl LicenseKind {
    pub const ALL: [LicenseKind; 9] = [
        LicenseKind::Driving,
        LicenseKind::CommercialDriving,
        LicenseKind::ForkliftOperation,
        LicenseKind::Nursing,
        LicenseKind::Teaching,
        LicenseKind::LawPractice,
        LicenseKind::MedicalPractice,
        LicenseKind::RealEstate,
        LicenseKind::PrivatePilot,
    ];

    /// Stable catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::CommercialDriving => "commercial_driving",
            Self::ForkliftOperation => "forklift_operation",
            Self::Nursing => "nursing",
            Self::Teaching => "teaching",
            Self::LawPractice => "law_practice",
            Self::MedicalPractice => "medical_practice",
            Self::RealEstate => "real_estate",
            Self::PrivatePilot => "private_pilot",
        }
    }

    /// Parse a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }
}

impl CredentialIdentity for LicenseKind {
    const KIND: CredentialKind = CredentialKind::License;

    fn label(&self) -> &'static str {
        match self {
            Self::Driving => "driving license",
            Self::CommercialDriving => "commercial driving license",
            Self::ForkliftOperation => "forklift operation license",
            Self::Nursing => "nursing license",
            Self::Teaching => "teaching license",
            Self::LawPractice => "law practice license",
            Self::MedicalPractice => "medical practice license",
            Self::RealEstate => "real estate license",
            Self::PrivatePilot => "private pilot license",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_code_roundtrip() {
        for id in ProjectType::ALL {
            assert_eq!(ProjectType::from_code(id.code()), Some(id));
        }
        assert_eq!(ProjectType::from_code("podcast"), None);
    }

    #[test]
    fn test_certification_code_roundtrip() {
        for id in Certification::ALL {
            assert_eq!(Certification::from_code(id.code()), Some(id));
        }
        assert_eq!(Certification::from_code("scuba_diving"), None);
    }

    #[test]
    fn test_software_code_roundtrip() {
        for id in SoftwareSkill::ALL {
            assert_eq!(SoftwareSkill::from_code(id.code()), Some(id));
        }
    }

    #[test]
    fn test_license_code_roundtrip() {
        for id in LicenseKind::ALL {
            assert_eq!(LicenseKind::from_code(id.code()), Some(id));
        }
    }

    #[test]
    fn test_certification_codes_distinct() {
        let codes: HashSet<&str> = Certification::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Certification::ALL.len());
    }

    #[test]
    fn test_kind_constants() {
        assert_eq!(ProjectType::KIND, CredentialKind::PortfolioProject);
        assert_eq!(Certification::KIND, CredentialKind::Certification);
        assert_eq!(SoftwareSkill::KIND, CredentialKind::Software);
        assert_eq!(LicenseKind::KIND, CredentialKind::License);
    }
}
