//! Generic form state controller
//!
//! A value bag (field name -> JSON value), an error bag (field name ->
//! message), array sub-item helpers and a rule-based validator. Platform
//! independent; the frontend wraps it in a signal.

mod rules;
mod state;

pub use rules::FormRules;
pub use state::{FormState, DEFAULT_UNIQUE_KEY};

use std::collections::BTreeMap;

/// Field name -> current value
pub type FieldValues = serde_json::Map<String, serde_json::Value>;

/// Field name -> validation message
pub type FieldErrors = BTreeMap<String, String>;
