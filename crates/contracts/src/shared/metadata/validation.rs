//! Validation rules for form fields

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Loose e-mail shape: something@something.something, no whitespace.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Loose phone shape: 10 digits with an optional +CC prefix.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+\d{1,3}[- ]?)?\d{10}$").expect("phone pattern compiles"));

pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub is_email: bool,
    pub is_phone: bool,
}

impl FieldRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            is_email: false,
            is_phone: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            is_email: false,
            is_phone: false,
        }
    }

    pub const fn email(mut self) -> Self {
        self.is_email = true;
        self
    }

    pub const fn phone(mut self) -> Self {
        self.is_phone = true;
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// True when no rule is set
    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }

    /// Check a bag value against the rules.
    ///
    /// Returns the message of the first failing rule, in the order
    /// required, e-mail, phone, minimum length.
    pub fn check(&self, value: Option<&Value>) -> Option<String> {
        if self.required && is_blank(value) {
            return Some("Ce champ est obligatoire".to_string());
        }

        let text = value.map(as_text).unwrap_or_default();

        if self.is_email && !text.is_empty() && !validate_email(&text) {
            return Some("Adresse e-mail invalide".to_string());
        }

        if self.is_phone && !text.is_empty() && !validate_phone(&text) {
            return Some("Numéro de téléphone invalide".to_string());
        }

        if let Some(min) = self.min_length {
            if length_of(value).is_some_and(|len| len < min) {
                return Some(format!("Au moins {} caractères requis", min));
            }
        }

        None
    }
}

/// "Falsy" bag value: absent, null, false, zero, blank string or empty list
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(_)) => false,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Length used by the minimum-length rule; numbers and objects have none
fn length_of(value: Option<&Value>) -> Option<usize> {
    match value {
        None | Some(Value::Null) => Some(0),
        Some(Value::String(s)) => Some(s.chars().count()),
        Some(Value::Array(items)) => Some(items.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_email() {
        assert!(!validate_email("not-an-email"));
        assert!(validate_email("a@b.co"));
        assert!(validate_email("jean.dupont+rh@entreprise.fr"));
        assert!(!validate_email("jean @x.com"));
        assert!(!validate_email("jean@x"));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0600000000"));
        assert!(validate_phone("+33 0600000000"));
        assert!(validate_phone("+330600000000"));
        assert!(!validate_phone("06 00 00 00 00"));
        assert!(!validate_phone("12345"));
    }

    #[test]
    fn test_required_treats_falsy_as_missing() {
        let rules = FieldRules::required();
        assert!(rules.check(None).is_some());
        assert!(rules.check(Some(&json!(null))).is_some());
        assert!(rules.check(Some(&json!(""))).is_some());
        assert!(rules.check(Some(&json!("   "))).is_some());
        assert!(rules.check(Some(&json!(0))).is_some());
        assert!(rules.check(Some(&json!([]))).is_some());
        assert!(rules.check(Some(&json!("x"))).is_none());
        assert!(rules.check(Some(&json!(12))).is_none());
    }

    #[test]
    fn test_email_and_phone_only_checked_when_present() {
        let email = FieldRules::none().email();
        assert!(email.check(Some(&json!(""))).is_none());
        assert_eq!(
            email.check(Some(&json!("nope"))).as_deref(),
            Some("Adresse e-mail invalide")
        );

        let phone = FieldRules::none().phone();
        assert!(phone.check(None).is_none());
        assert!(phone.check(Some(&json!("0612345678"))).is_none());
        assert!(phone.check(Some(&json!("06-12"))).is_some());
    }

    #[test]
    fn test_min_length() {
        let rules = FieldRules::none().min_length(3);
        assert!(rules.check(Some(&json!("ab"))).is_some());
        assert!(rules.check(Some(&json!("abc"))).is_none());
        assert!(rules.check(Some(&json!(["a", "b"]))).is_some());
        assert!(rules.check(Some(&json!(42))).is_none());
    }

    #[test]
    fn test_required_wins_over_other_rules() {
        let rules = FieldRules::required().email().min_length(5);
        assert_eq!(
            rules.check(Some(&json!(""))).as_deref(),
            Some("Ce champ est obligatoire")
        );
    }
}
