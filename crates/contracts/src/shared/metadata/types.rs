//! Core metadata types for record kinds
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::InputKind;
use super::validation::FieldRules;
use serde_json::Value;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for a record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    /// Index of the kind in the portal (e.g. "a004")
    pub entity_index: &'static str,
    /// Collection name (e.g. "member")
    pub collection_name: &'static str,
    /// Browser storage key of the persisted record list (e.g. "members")
    pub storage_key: &'static str,
    pub ui: EntityUiMetadata,
}

impl EntityMetadataInfo {
    /// Full name used as tab key (e.g. "a004_member")
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.entity_index, self.collection_name)
    }
}

/// UI metadata for a record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    /// Singular name (e.g. "Membre")
    pub element_name: &'static str,
    /// Plural name, used for menu entries and tab titles (e.g. "Membres")
    pub list_name: &'static str,
    pub icon: &'static str,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field of a record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// JSON field name in the stored record
    pub name: &'static str,
    pub input: InputKind,
    pub ui: FieldUiMetadata,
    pub validation: FieldRules,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self {
            name,
            input,
            ui: FieldUiMetadata {
                label,
                placeholder: None,
                visible_in_list: false,
                visible_in_form: true,
            },
            validation: FieldRules::none(),
        }
    }

    pub const fn rules(mut self, rules: FieldRules) -> Self {
        self.validation = rules;
        self
    }

    pub const fn in_list(mut self) -> Self {
        self.ui.visible_in_list = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

/// Render a bag value as display text.
///
/// Arrays of tags are shown as their labels joined with ", ".
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => if *b { "Oui" } else { "Non" }.to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            // 1500.0 reads as 1500
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(obj) => display_value(obj.get("label")),
                other => display_value(Some(other)),
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(_)) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some(&json!("Paris"))), "Paris");
        assert_eq!(display_value(Some(&json!(1500.5))), "1500.5");
        assert_eq!(display_value(Some(&json!(1500.0))), "1500");
        assert_eq!(
            display_value(Some(&json!([{"id": "1", "label": "Rust"}, "SQL"]))),
            "Rust, SQL"
        );
    }

    #[test]
    fn test_builder_sets_flags() {
        const FIELD: FieldMetadata = FieldMetadata::new("email", "E-mail", InputKind::Email)
            .rules(FieldRules::required().email())
            .in_list();
        assert!(FIELD.visible_in_list());
        assert!(FIELD.visible_in_form());
        assert!(!FIELD.is_optional());
        assert!(FIELD.validation.is_email);
    }
}
