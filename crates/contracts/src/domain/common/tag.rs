use super::lenient;
use super::record_id::RecordId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Array sub-item of a list-valued field (skill, language, clause...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tag {
    pub id: RecordId,
    pub label: String,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            label: label.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    // Some pages stored plain strings instead of objects
    Label(String),
    Full {
        #[serde(default)]
        id: RecordId,
        #[serde(default, deserialize_with = "lenient::string")]
        label: String,
    },
    Scalar(Value),
}

impl<'de> Deserialize<'de> for Tag {
    /// Items stored without an id get a fresh one, so removing one of them
    /// never takes its siblings along.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (id, label) = match RawTag::deserialize(deserializer)? {
            RawTag::Label(label) => (RecordId::default(), label),
            RawTag::Full { id, label } => (id, label),
            RawTag::Scalar(Value::Number(n)) => (RecordId::default(), n.to_string()),
            RawTag::Scalar(Value::Bool(b)) => (RecordId::default(), b.to_string()),
            RawTag::Scalar(other) => {
                return Err(D::Error::custom(format!("unexpected list item: {other}")))
            }
        };
        let id = if id.is_empty() { RecordId::generate() } else { id };
        Ok(Tag { id, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_string_or_object() {
        let tags: Vec<Tag> =
            serde_json::from_str(r#"["Rust", {"id": 7, "label": "SQL"}, 42]"#).unwrap();
        assert_eq!(tags[0].label, "Rust");
        assert!(!tags[0].id.is_empty());
        assert_eq!(tags[1].id.as_str(), "7");
        assert_eq!(tags[1].label, "SQL");
        assert_eq!(tags[2].label, "42");
    }

    #[test]
    fn test_tags_without_id_get_distinct_ids() {
        let tags: Vec<Tag> = serde_json::from_str(
            r#"[{"label": "Rust"}, {"id": "", "label": "SQL"}, "Go", "Go"]"#,
        )
        .unwrap();
        assert!(tags.iter().all(|t| !t.id.is_empty()));
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
