use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a stored record or array sub-item.
///
/// Older pages generated numeric timestamp ids (`Date.now()`), newer ones
/// strings. Both deserialize into the same string form; new ids are UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Unsigned(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawId>::deserialize(deserializer)?;
        Ok(match raw {
            None => RecordId::default(),
            Some(RawId::Text(s)) => RecordId(s),
            Some(RawId::Int(n)) => RecordId(n.to_string()),
            Some(RawId::Unsigned(n)) => RecordId(n.to_string()),
            Some(RawId::Float(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                RecordId((f as i64).to_string())
            }
            Some(RawId::Float(f)) => RecordId(f.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_legacy_numeric_ids() {
        let id: RecordId = serde_json::from_str("1718000000000").unwrap();
        assert_eq!(id.as_str(), "1718000000000");

        let id: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.as_str(), "abc");

        let id: RecordId = serde_json::from_str("null").unwrap();
        assert!(id.is_empty());
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
        assert!(!RecordId::generate().is_empty());
    }
}
