pub mod aggregate;
mod metadata;

pub use aggregate::Applicant;
pub use metadata::{ENTITY_METADATA, FIELDS};
