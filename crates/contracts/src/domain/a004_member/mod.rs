pub mod aggregate;
mod metadata;

pub use aggregate::Member;
pub use metadata::{ENTITY_METADATA, FIELDS};
