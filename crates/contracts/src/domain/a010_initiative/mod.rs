pub mod aggregate;
mod metadata;

pub use aggregate::Initiative;
pub use metadata::{ENTITY_METADATA, FIELDS};
