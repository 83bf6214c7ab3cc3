use crate::domain::common::{lenient, RecordId, RecordKind, Tag};
use crate::impl_portal_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::FIELDS;

/// Spontaneous application received through the careers page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Applicant {
    pub id: RecordId,

    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub desired_position: String,
    #[serde(deserialize_with = "lenient::string")]
    pub availability: String,
    #[serde(deserialize_with = "lenient::list")]
    pub languages: Vec<Tag>,
    #[serde(deserialize_with = "lenient::string")]
    pub motivation: String,

    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields written by other versions of the page, kept as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_portal_record!(Applicant, RecordKind::Applicant, FIELDS, |r| r.name.clone());
