use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Successful response from the BMI calculation endpoint
///
/// The fields are shown to the user as-is; nothing here is interpreted
/// beyond `bmi`, which positions the meter indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: String,
    pub advice: String,
    pub ideal_weight: IdealWeight,
    pub weight_status: String,
}

/// Ideal weight as reported by the service, either a number or free text
/// such as `"65-75kg"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdealWeight {
    Number(f64),
    Text(String),
}

impl fmt::Display for IdealWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdealWeight::Number(n) => write!(f, "{}", n),
            IdealWeight::Text(s) => f.write_str(s),
        }
    }
}

/// Error body returned alongside a non-success status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Human-readable message carried by the error body
    ///
    /// String details are returned verbatim. Structured details, such as a
    /// list of field validation errors, are returned as compact JSON.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
