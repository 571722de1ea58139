//! Education stages, subjects and earned degrees

pub mod degree;
pub mod stage;
pub mod subject;

pub use degree::{available_next_educations, highest_rank, holds_accepted_subject, Degree};
pub use stage::EducationStage;
pub use subject::SubjectProfile;
