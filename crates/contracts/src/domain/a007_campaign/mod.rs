pub mod aggregate;
mod metadata;

pub use aggregate::Campaign;
pub use metadata::{ENTITY_METADATA, FIELDS};
