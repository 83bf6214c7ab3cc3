pub mod aggregate;
mod metadata;

pub use aggregate::Employee;
pub use metadata::{ENTITY_METADATA, FIELDS};
