pub mod aggregate;
mod metadata;

pub use aggregate::ItTicket;
pub use metadata::{ENTITY_METADATA, FIELDS};
