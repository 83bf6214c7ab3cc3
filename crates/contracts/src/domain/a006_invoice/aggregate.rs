use crate::domain::common::{lenient, Numeric, RecordId, RecordKind};
use crate::impl_portal_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::FIELDS;

/// Customer invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invoice {
    pub id: RecordId,

    #[serde(deserialize_with = "lenient::string")]
    pub number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub client: String,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub amount: Option<Numeric>,
    #[serde(deserialize_with = "lenient::string")]
    pub issue_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub due_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
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

impl_portal_record!(Invoice, RecordKind::Invoice, FIELDS, |r| r.number.clone());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use serde_json::json;

    #[test]
    fn test_amount_typed_as_text_still_loads() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": "f1",
            "number": 2024001,
            "client": "ACME",
            "amount": "1 250",
        }))
        .unwrap();
        assert_eq!(invoice.number, "2024001");
        assert_eq!(invoice.amount, Some(Numeric::Raw(json!("1 250"))));

        let invoice: Invoice = serde_json::from_value(json!({"amount": "1250.40"})).unwrap();
        assert_eq!(invoice.amount, Some(Numeric::Number(1250.4)));
    }

    #[test]
    fn test_amount_text_is_written_back_unchanged() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": "f2",
            "client": "ACME",
            "amount": "1 250 € HT",
        }))
        .unwrap();
        let written = serde_json::to_value(&invoice).unwrap();
        assert_eq!(written["amount"], json!("1 250 € HT"));

        let reloaded: Invoice = serde_json::from_value(written).unwrap();
        assert_eq!(reloaded.amount, invoice.amount);
        assert_eq!(reloaded.amount.and_then(|a| a.as_f64()), None);

        let form = FormState::for_record(&invoice);
        assert_eq!(form.value("amount"), Some(&json!("1 250 € HT")));
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let mut form = FormState::for_record(&Invoice::default());
        form.handle_change("number", json!("FA-1"));
        form.handle_change("client", json!("ACME"));
        form.handle_change("amount", json!(0));
        assert!(!form.validate());
        assert!(form.error("amount").is_some());

        form.handle_change("amount", json!(99.9));
        assert!(form.validate());
        let invoice: Invoice = form.to_record().unwrap();
        assert_eq!(invoice.amount, Some(Numeric::Number(99.9)));
    }
}
