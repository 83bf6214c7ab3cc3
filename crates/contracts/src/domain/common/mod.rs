//! Common types and traits for all record kinds

pub mod department;
pub mod kind;
pub mod lenient;
pub mod numeric;
pub mod record;
pub mod record_id;
pub mod tag;

// Re-exports
pub use department::Department;
pub use kind::RecordKind;
pub use numeric::Numeric;
pub use record::PortalRecord;
pub use record_id::RecordId;
pub use tag::Tag;
