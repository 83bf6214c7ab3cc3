use crate::domain::common::{lenient, Numeric, RecordId, RecordKind};
use crate::impl_portal_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::FIELDS;

/// Employee of the company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,

    #[serde(deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub department: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contract_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub hire_date: String,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub salary: Option<Numeric>,

    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields written by other versions of the page, kept as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_portal_record!(Employee, RecordKind::Employee, FIELDS, |r| {
    format!("{} {}", r.first_name, r.last_name).trim().to_string()
});
