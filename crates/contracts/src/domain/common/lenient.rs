//! Lenient deserializers for fields that older pages stored with a
//! different JSON type (numbers typed into text inputs, amounts kept as
//! strings). A record with such a field must still load.

use super::numeric::Numeric;
use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional number from a number, a numeric string, an empty string or null.
/// Any other value (text such as "1 250" or "n/a") is kept verbatim.
pub fn optional_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Numeric>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => Some(Numeric::Number(f)),
            None => Some(Numeric::Raw(Value::Number(n))),
        },
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => match s.trim().replace(',', ".").parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Numeric::Number(f)),
            _ => Some(Numeric::Raw(Value::String(s))),
        },
        Some(other) => Some(Numeric::Raw(other)),
    })
}

/// String from a string, a number or a bool; null becomes empty.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// List that may be stored as null or as a single element.
/// Null elements are dropped; an element that does not fit `T` fails the
/// whole value rather than disappearing.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    };
    items
        .into_iter()
        .filter(|item| !item.is_null())
        .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
        .collect()
}

/// Optional RFC 3339 timestamp; anything unparseable becomes `None`.
pub fn optional_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "optional_number")]
        amount: Option<Numeric>,
        #[serde(default, deserialize_with = "string")]
        phone: String,
    }

    #[test]
    fn test_number_from_string() {
        let p: Row = serde_json::from_str(r#"{"amount": "1500,50", "phone": 600000000}"#).unwrap();
        assert_eq!(p.amount, Some(Numeric::Number(1500.5)));
        assert_eq!(p.phone, "600000000");
    }

    #[test]
    fn test_null_list_and_bad_timestamp() {
        #[derive(Deserialize)]
        struct Dated {
            #[serde(default, deserialize_with = "list")]
            tags: Vec<String>,
            #[serde(default, deserialize_with = "optional_datetime")]
            created_at: Option<DateTime<Utc>>,
        }
        let row: Dated = serde_json::from_str(r#"{"tags": null, "created_at": "12/06/2024"}"#).unwrap();
        assert!(row.tags.is_empty());
        assert!(row.created_at.is_none());

        let row: Dated = serde_json::from_str(r#"{"created_at": "2024-06-12T08:30:00Z"}"#).unwrap();
        assert!(row.created_at.is_some());
    }

    #[test]
    fn test_garbage_and_missing() {
        let p: Row = serde_json::from_str(r#"{"amount": "n/a"}"#).unwrap();
        assert_eq!(p.amount, Some(Numeric::Raw(json!("n/a"))));

        let p: Row = serde_json::from_str(r#"{"amount": "  "}"#).unwrap();
        assert_eq!(p.amount, None);
        assert_eq!(p.phone, "");

        let p: Row = serde_json::from_str(r#"{"amount": null, "phone": null}"#).unwrap();
        assert_eq!(p.amount, None);
        assert_eq!(p.phone, "");
    }

    #[test]
    fn test_list_from_single_value_and_null_items() {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(default, deserialize_with = "list")]
            tags: Vec<String>,
        }
        let row: Tagged = serde_json::from_str(r#"{"tags": "Rust"}"#).unwrap();
        assert_eq!(row.tags, vec!["Rust"]);

        let row: Tagged = serde_json::from_str(r#"{"tags": ["Rust", null, "SQL"]}"#).unwrap();
        assert_eq!(row.tags, vec!["Rust", "SQL"]);

        let row: Tagged = serde_json::from_str(r#"{"tags": ""}"#).unwrap();
        assert!(row.tags.is_empty());
    }
}
