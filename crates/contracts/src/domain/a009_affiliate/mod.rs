pub mod aggregate;
mod metadata;

pub use aggregate::Affiliate;
pub use metadata::{ENTITY_METADATA, FIELDS};
