pub mod aggregate;
mod metadata;

pub use aggregate::Lead;
pub use metadata::{ENTITY_METADATA, FIELDS};
