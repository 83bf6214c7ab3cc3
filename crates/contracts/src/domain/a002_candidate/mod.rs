pub mod aggregate;
mod metadata;

pub use aggregate::Candidate;
pub use metadata::{ENTITY_METADATA, FIELDS};
