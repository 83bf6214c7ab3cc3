use crate::domain::common::{lenient, RecordId, RecordKind, Tag};
use crate::impl_portal_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::FIELDS;

/// Member of the communication team directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    pub id: RecordId,

    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub team: String,
    #[serde(deserialize_with = "lenient::list")]
    pub skills: Vec<Tag>,
    #[serde(deserialize_with = "lenient::list")]
    pub languages: Vec<Tag>,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,

    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::optional_datetime", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields written by other versions of the page, kept as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl_portal_record!(Member, RecordKind::Member, FIELDS, |r| r.name.clone());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::PortalRecord;
    use crate::shared::form::{FormState, DEFAULT_UNIQUE_KEY};
    use crate::shared::record_list;
    use serde_json::json;

    #[test]
    fn test_add_member_through_form() {
        let mut list: Vec<Member> = Vec::new();

        let mut form = FormState::for_record(&Member::default());
        form.handle_change("name", json!("Jean Dupont"));
        form.handle_change("email", json!("jean@x.com"));
        form.handle_change("phone", json!("0600000000"));
        assert!(form.validate());
        assert!(form.errors().is_empty());

        let member: Member = form.to_record().unwrap();
        let id = record_list::insert_new(&mut list, member);

        assert_eq!(list.len(), 1);
        assert!(!id.is_empty());
        assert_eq!(list[0].id, id);
        assert_eq!(list[0].name, "Jean Dupont");
        assert_eq!(list[0].phone, "0600000000");
    }

    #[test]
    fn test_new_member_form_reports_every_required_field() {
        let mut form = FormState::for_record(&Member::default());
        assert!(!form.validate());
        let failing: Vec<&str> = form.errors().keys().map(String::as_str).collect();
        assert_eq!(failing, ["email", "name", "phone"]);
    }

    #[test]
    fn test_skills_from_form_become_tags() {
        let mut form = FormState::for_record(&Member::default());
        form.handle_array_add("skills", json!({"label": "Rédaction"}), "label");
        form.handle_array_add("skills", json!({"label": "Rédaction"}), "label");
        form.handle_array_add("skills", json!({"label": "PAO"}), DEFAULT_UNIQUE_KEY);

        let member: Member = form.to_record().unwrap();
        let labels: Vec<&str> = member.skills.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Rédaction", "PAO"]);
        assert!(member.skills.iter().all(|t| !t.id.is_empty()));
    }

    #[test]
    fn test_loads_legacy_record() {
        let raw = json!({
            "id": 1718000000000u64,
            "name": "Marie Curie",
            "email": "marie@x.com",
            "phone": 600000000,
            "role": null,
            "skills": ["Presse", "Vidéo"],
            "avatarColor": "#ff9800"
        });
        let member: Member = serde_json::from_value(raw).unwrap();
        assert_eq!(member.id.as_str(), "1718000000000");
        assert_eq!(member.phone, "600000000");
        assert_eq!(member.role, "");
        assert_eq!(member.skills.len(), 2);
        assert!(member.languages.is_empty());
        assert_eq!(member.extra.get("avatarColor"), Some(&json!("#ff9800")));

        let written = serde_json::to_value(&member).unwrap();
        assert_eq!(written["avatarColor"], json!("#ff9800"));
        assert_eq!(written["id"], json!("1718000000000"));
    }

    #[test]
    fn test_removing_one_idless_skill_keeps_the_others() {
        let raw = json!({
            "id": "m7",
            "name": "Léa",
            "skills": [{"label": "Rust"}, {"label": "SQL"}, {"label": "Go"}],
        });
        let member: Member = serde_json::from_value(raw).unwrap();
        let mut form = FormState::for_record(&member);
        let first = form.value("skills").unwrap()[0].clone();

        form.handle_array_remove("skills", &first, DEFAULT_UNIQUE_KEY);

        let edited: Member = form.to_record().unwrap();
        let labels: Vec<&str> = edited.skills.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["SQL", "Go"]);
    }

    #[test]
    fn test_values_round_trip() {
        let member = Member {
            id: "m1".into(),
            name: "Jean".to_string(),
            skills: vec![Tag::new("Rust")],
            ..Member::default()
        };
        let back = Member::from_values(&member.to_values()).unwrap();
        assert_eq!(back, member);
        assert_eq!(back.title(), "Jean");
    }
}
