//! Static job catalog: entities and the tolerant document loader

pub mod job;
pub mod loader;

pub use job::{Job, JobId};
pub use loader::{load_catalog, Catalog};
