//! Reactive form controller: a `FormState` behind a signal

pub mod fields;

pub use fields::{FormField, TagsField};

use contracts::domain::common::PortalRecord;
use contracts::shared::form::{FieldValues, FormRules, FormState};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Copy handle over one form's state.
///
/// Reads are tracked, so views re-render when a value or error changes.
#[derive(Clone, Copy)]
pub struct FormHandle {
    state: RwSignal<FormState>,
}

/// Form with the given initial values and rules
pub fn use_form(initial: FieldValues, rules: FormRules) -> FormHandle {
    FormHandle {
        state: RwSignal::new(FormState::new(initial, rules)),
    }
}

/// Form bound to a record and to the rules of its kind
pub fn use_record_form<R: PortalRecord>(record: &R) -> FormHandle {
    FormHandle {
        state: RwSignal::new(FormState::for_record(record)),
    }
}

impl FormHandle {
    pub fn values(&self) -> FieldValues {
        self.state.with(|s| s.values().clone())
    }

    pub fn text(&self, field: &str) -> String {
        self.state.with(|s| s.text(field))
    }

    pub fn items(&self, field: &str) -> Vec<Value> {
        self.state.with(|s| s.items(field))
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.state.with(|s| s.error(field).map(str::to_string))
    }

    pub fn has_errors(&self) -> bool {
        self.state.with(|s| s.has_errors())
    }

    pub fn is_dirty(&self) -> bool {
        self.state.with(|s| s.is_dirty())
    }

    pub fn handle_change(&self, field: &str, value: Value) {
        self.state.update(|s| s.handle_change(field, value));
    }

    pub fn handle_array_add(&self, field: &str, item: Value, unique_key: &str) {
        self.state
            .update(|s| s.handle_array_add(field, item, unique_key));
    }

    pub fn handle_array_remove(&self, field: &str, item: &Value, unique_key: &str) {
        self.state
            .update(|s| s.handle_array_remove(field, item, unique_key));
    }

    /// Recompute errors; true when the form is valid
    pub fn validate(&self) -> bool {
        self.state.try_update(|s| s.validate()).unwrap_or(false)
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    pub fn set_error(&self, field: &str, message: impl Into<String>) {
        let message = message.into();
        self.state.update(|s| s.set_error(field, message));
    }

    /// Validate, then convert the values into a record.
    /// `None` when a rule fails or the values do not fit the record type.
    pub fn submit<R: DeserializeOwned>(&self) -> Result<Option<R>, serde_json::Error> {
        if !self.validate() {
            return Ok(None);
        }
        self.state.with_untracked(|s| s.to_record::<R>()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_member::Member;
    use serde_json::json;

    #[test]
    fn test_member_form_submit_flow() {
        let form = use_record_form(&Member::default());
        assert!(matches!(form.submit::<Member>(), Ok(None)));
        assert!(form.error("name").is_some());

        form.handle_change("name", json!("Jean Dupont"));
        form.handle_change("email", json!("jean@x.com"));
        form.handle_change("phone", json!("0600000000"));
        form.handle_array_add("skills", json!({"label": "Rust"}), "label");
        assert!(form.error("name").is_none());
        assert!(form.is_dirty());

        let member = form.submit::<Member>().unwrap().unwrap();
        assert_eq!(member.name, "Jean Dupont");
        assert_eq!(member.skills.len(), 1);
        assert_eq!(member.skills[0].label, "Rust");
    }

    #[test]
    fn test_reset_discards_edits() {
        let form = use_record_form(&Member::default());
        form.handle_change("name", json!("Jean"));
        form.validate();
        form.reset();
        assert_eq!(form.text("name"), "");
        assert!(!form.has_errors());
    }
}
