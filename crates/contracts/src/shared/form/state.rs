use super::{FieldErrors, FieldValues, FormRules};
use crate::domain::common::{PortalRecord, RecordId};
use crate::shared::metadata::display_value;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default key compared by the array helpers
pub const DEFAULT_UNIQUE_KEY: &str = "id";

/// State of one form: current values, errors, and the rules to check.
///
/// No operation fails: every call either changes the state or is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    initial: FieldValues,
    values: FieldValues,
    errors: FieldErrors,
    rules: FormRules,
}

impl FormState {
    pub fn new(initial: FieldValues, rules: FormRules) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            rules,
        }
    }

    /// Form bound to an existing record (or `R::default()` for a new one),
    /// with the rules declared by the kind's field metadata.
    pub fn for_record<R: PortalRecord>(record: &R) -> Self {
        Self::new(record.to_values(), FormRules::from_fields(R::fields()))
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Value as input text ("" for null or absent)
    pub fn text(&self, field: &str) -> String {
        display_value(self.values.get(field))
    }

    /// Elements of an array field (empty when absent or not an array)
    pub fn items(&self, field: &str) -> Vec<Value> {
        match self.values.get(field) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// Overwrite a field value. A pending error on that field is cleared
    /// and not re-checked until the next `validate`.
    pub fn handle_change(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
        self.errors.remove(field);
    }

    /// Append `item` to the array field, with a generated `"id"` when the
    /// item has none. If an element already has the same value at
    /// `unique_key`, nothing happens.
    pub fn handle_array_add(&mut self, field: &str, item: Value, unique_key: &str) {
        let slot = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if slot.is_null() {
            *slot = Value::Array(Vec::new());
        }
        let Value::Array(items) = slot else {
            return;
        };

        let duplicate = match &item {
            Value::Object(_) => items.iter().any(|e| e.get(unique_key) == item.get(unique_key)),
            other => items.contains(other),
        };
        if duplicate {
            return;
        }

        let item = match item {
            Value::Object(mut obj) => {
                if !obj.contains_key(DEFAULT_UNIQUE_KEY) {
                    obj.insert(
                        DEFAULT_UNIQUE_KEY.to_string(),
                        Value::String(RecordId::generate().to_string()),
                    );
                }
                Value::Object(obj)
            }
            other => other,
        };
        items.push(item);
        self.errors.remove(field);
    }

    /// Remove every element of the array field whose `unique_key` value
    /// equals the one of `item`.
    pub fn handle_array_remove(&mut self, field: &str, item: &Value, unique_key: &str) {
        let Some(Value::Array(items)) = self.values.get_mut(field) else {
            return;
        };
        match item {
            Value::Object(_) => {
                let key = item.get(unique_key);
                items.retain(|e| e.get(unique_key) != key);
            }
            other => items.retain(|e| e != other),
        }
    }

    /// Recompute the whole error bag from the rules. True iff no error.
    pub fn validate(&mut self) -> bool {
        self.errors = self
            .rules
            .iter()
            .filter_map(|(field, rules)| {
                rules
                    .check(self.values.get(field))
                    .map(|message| (field.clone(), message))
            })
            .collect();
        self.errors.is_empty()
    }

    /// Restore the initial values and clear errors
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    /// Set an error that is not produced by the rules (e.g. conversion)
    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Convert the value bag into a typed record
    pub fn to_record<R: DeserializeOwned>(&self) -> Result<R, serde_json::Error> {
        serde_json::from_value(Value::Object(self.values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::FieldRules;
    use serde_json::json;

    fn bag(value: Value) -> FieldValues {
        match value {
            Value::Object(map) => map,
            _ => panic!("object expected"),
        }
    }

    fn member_form() -> FormState {
        FormState::new(
            bag(json!({
                "name": "",
                "email": "",
                "phone": "",
                "bio": "",
                "skills": []
            })),
            FormRules::new()
                .with("name", FieldRules::required().min_length(2))
                .with("email", FieldRules::required().email())
                .with("phone", FieldRules::none().phone()),
        )
    }

    #[test]
    fn test_validate_untouched_required_fields() {
        let mut form = member_form();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 2);
        assert!(form.error("name").is_some());
        assert!(form.error("email").is_some());
        assert!(form.error("phone").is_none());
    }

    #[test]
    fn test_handle_change_clears_error_without_revalidating() {
        let mut form = member_form();
        form.validate();
        form.handle_change("email", json!("still-wrong"));
        assert!(form.error("email").is_none());
        assert!(form.error("name").is_some());

        assert!(!form.validate());
        assert_eq!(form.error("email"), Some("Adresse e-mail invalide"));
    }

    #[test]
    fn test_validate_passes_with_valid_values() {
        let mut form = member_form();
        form.handle_change("name", json!("Jean Dupont"));
        form.handle_change("email", json!("jean@x.com"));
        form.handle_change("phone", json!("0600000000"));
        assert!(form.validate());
        assert!(!form.has_errors());
    }

    #[test]
    fn test_array_add_rejects_duplicate_unique_key() {
        let mut form = member_form();
        form.handle_array_add("skills", json!({"label": "Rust"}), "label");
        form.handle_array_add("skills", json!({"label": "Rust", "level": "expert"}), "label");
        let skills = form.items("skills");
        assert_eq!(skills.len(), 1);
        assert!(skills[0].get("id").and_then(Value::as_str).is_some());
        assert!(skills[0].get("level").is_none());
    }

    #[test]
    fn test_array_add_keeps_existing_id() {
        let mut form = member_form();
        form.handle_array_add("skills", json!({"id": "s1", "label": "Rust"}), DEFAULT_UNIQUE_KEY);
        form.handle_array_add("skills", json!({"id": "s1", "label": "Go"}), DEFAULT_UNIQUE_KEY);
        form.handle_array_add("skills", json!({"label": "Go"}), DEFAULT_UNIQUE_KEY);
        let skills = form.items("skills");
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0]["id"], json!("s1"));
    }

    #[test]
    fn test_array_add_on_missing_or_scalar_field() {
        let mut form = member_form();
        form.handle_array_add("languages", json!({"label": "Anglais"}), "label");
        assert_eq!(form.items("languages").len(), 1);

        form.handle_array_add("name", json!({"label": "x"}), "label");
        assert_eq!(form.value("name"), Some(&json!("")));
    }

    #[test]
    fn test_array_remove_is_idempotent() {
        let mut form = member_form();
        form.handle_array_add("skills", json!({"id": "a", "label": "Rust"}), "id");
        form.handle_array_add("skills", json!({"id": "b", "label": "SQL"}), "id");

        let rust = json!({"id": "a", "label": "Rust"});
        form.handle_array_remove("skills", &rust, "id");
        let after_first = form.values().clone();
        form.handle_array_remove("skills", &rust, "id");
        assert_eq!(form.values(), &after_first);
        assert_eq!(form.items("skills").len(), 1);
    }

    #[test]
    fn test_array_remove_matches_on_unique_key_only() {
        let mut form = member_form();
        form.handle_array_add("skills", json!({"id": "a", "label": "Rust"}), "id");
        form.handle_array_add("skills", json!({"id": "b", "label": "Rust"}), "id");
        form.handle_array_remove("skills", &json!({"label": "Rust"}), "label");
        assert!(form.items("skills").is_empty());
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut form = member_form();
        let initial = form.values().clone();
        form.handle_change("name", json!("Jean"));
        form.handle_array_add("skills", json!({"label": "Rust"}), "label");
        form.validate();
        assert!(form.is_dirty());

        form.reset();
        assert_eq!(form.values(), &initial);
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_text_of_values() {
        let mut form = member_form();
        form.handle_change("age", json!(42));
        assert_eq!(form.text("age"), "42");
        assert_eq!(form.text("missing"), "");
    }
}
