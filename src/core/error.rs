use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifepathError {
    #[error("Unknown subject profile code: {0}")]
    UnknownSubject(String),

    #[error("Unknown credential code: {0}")]
    UnknownCredential(String),

    #[error("Malformed catalog entry: {0}")]
    MalformedEntry(String),

    #[error("Invalid degree: {0}")]
    InvalidDegree(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifepathError>;
