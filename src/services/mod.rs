// Service exports
pub mod bmi_api;

pub use bmi_api::{BmiApiClient, BmiApiError};
