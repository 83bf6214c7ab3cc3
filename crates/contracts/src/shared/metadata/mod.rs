//! Metadata types for describing record kinds and their fields
//!
//! This module provides compile-time metadata for every record kind of the portal.
//! All types use 'static lifetimes for zero-cost access to compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::PortalRecord;
//! use contracts::domain::a004_member::aggregate::Member;
//!
//! let meta = Member::metadata();
//! println!("Entity: {}", meta.ui.element_name);
//!
//! for field in Member::fields() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::InputKind;
pub use types::{display_value, EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldUiMetadata};
pub use validation::{validate_email, validate_phone, FieldRules};
