use serde::Serialize;
use serde_json::Value;

/// Value of a number field.
///
/// Older pages stored whatever was typed, so a stored value that does not
/// read as a number is kept as is and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Raw(Value),
}

impl Numeric {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Raw(_) => None,
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}
