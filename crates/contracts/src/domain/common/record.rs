use super::kind::RecordKind;
use super::record_id::RecordId;
use crate::shared::form::FieldValues;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Trait for a typed record stored in a persisted record list
///
/// Every record kind implements it (through `impl_portal_record!`).
pub trait PortalRecord:
    Clone + Default + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: RecordKind;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);

    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn set_created_at(&mut self, at: Option<DateTime<Utc>>);

    fn touch_updated(&mut self);

    /// Short human-readable label (name, title, number...)
    fn title(&self) -> String;

    // ============================================================================
    // Kind metadata
    // ============================================================================

    fn fields() -> &'static [FieldMetadata];

    fn metadata() -> &'static EntityMetadataInfo {
        Self::KIND.metadata()
    }

    fn storage_key() -> &'static str {
        Self::KIND.storage_key()
    }

    // ============================================================================
    // Form value bag conversion
    // ============================================================================

    /// The record as a form value bag (JSON field names)
    fn to_values(&self) -> FieldValues {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => FieldValues::new(),
        }
    }

    /// Build a record back from a form value bag
    fn from_values(values: &FieldValues) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(values.clone()))
    }
}

/// Implements `PortalRecord` for a struct carrying the common
/// `id`, `created_at` and `updated_at` fields.
#[macro_export]
macro_rules! impl_portal_record {
    ($ty:ty, $kind:expr, $fields:expr, |$r:ident| $title:expr) => {
        impl $crate::domain::common::PortalRecord for $ty {
            const KIND: $crate::domain::common::RecordKind = $kind;

            fn id(&self) -> &$crate::domain::common::RecordId {
                &self.id
            }

            fn set_id(&mut self, id: $crate::domain::common::RecordId) {
                self.id = id;
            }

            fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.created_at
            }

            fn set_created_at(&mut self, at: Option<chrono::DateTime<chrono::Utc>>) {
                self.created_at = at;
            }

            fn touch_updated(&mut self) {
                self.updated_at = Some(chrono::Utc::now());
            }

            fn title(&self) -> String {
                let $r = self;
                $title
            }

            fn fields() -> &'static [$crate::shared::metadata::FieldMetadata] {
                $fields
            }
        }
    };
}
