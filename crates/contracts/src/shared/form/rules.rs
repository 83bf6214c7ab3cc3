use crate::shared::metadata::{FieldMetadata, FieldRules};
use std::collections::BTreeMap;

/// Field name -> rule set consumed by `FormState::validate`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRules(BTreeMap<String, FieldRules>);

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, rules: FieldRules) -> Self {
        self.insert(field, rules);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rules: FieldRules) {
        self.0.insert(field.into(), rules);
    }

    /// Rules of every field of a kind that declares at least one rule
    pub fn from_fields(fields: &[FieldMetadata]) -> Self {
        Self(
            fields
                .iter()
                .filter(|f| !f.validation.is_empty())
                .map(|f| (f.name.to_string(), f.validation))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<&FieldRules> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldRules)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
