pub mod aggregate;
mod metadata;

pub use aggregate::LegalContract;
pub use metadata::{ENTITY_METADATA, FIELDS};
