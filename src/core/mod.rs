pub mod config;
pub mod error;
pub mod types;

pub use error::{LifepathError, Result};
pub use types::PlayerId;
