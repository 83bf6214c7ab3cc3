pub mod aggregate;
mod metadata;

pub use aggregate::Invoice;
pub use metadata::{ENTITY_METADATA, FIELDS};
