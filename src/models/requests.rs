use serde::{Deserialize, Serialize};
use crate::core::{parse_float, parse_int};

/// Path of the BMI calculation endpoint, relative to the service origin
pub const CALCULATE_BMI_PATH: &str = "/api/calculate-bmi";

/// Request body for the BMI calculation endpoint
///
/// Numeric fields keep whatever the coercion produced. serde_json writes
/// non-finite floats and a missing age as `null`, so a field that could not
/// be read as a number still goes out with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRequest {
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub age: Option<i64>,
}

impl BmiRequest {
    /// Build a request from raw form field text
    pub fn from_fields(weight: &str, height: &str, gender: &str, age: &str) -> Self {
        Self {
            weight: parse_float(weight),
            height: parse_float(height),
            gender: gender.to_string(),
            age: parse_int(age),
        }
    }
}
