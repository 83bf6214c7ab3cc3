use crate::domain::common::{lenient, Numeric, RecordId, RecordKind};
use crate::impl_portal_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::FIELDS;

/// Commercial prospect followed by the sales team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lead {
    pub id: RecordId,

    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub estimated_value: Option<Numeric>,
    #[serde(deserialize_with = "lenient::string")]
    pub notes: String,

    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields written by other versions of the page, kept as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_portal_record!(Lead, RecordKind::Lead, FIELDS, |r| r.name.clone());
