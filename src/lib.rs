//! BMI Meter - form client for the BMI calculator service
//!
//! This library submits weight, height, gender and age to the BMI service
//! and renders the returned metrics, positioning an indicator on a
//! fixed-range BMI meter.

pub mod config;
pub mod core;
pub mod form;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{indicator_offset, parse_float, parse_int};
pub use crate::form::{FormHandler, Notifier, Page, SubmitOutcome};
pub use crate::models::{BmiRequest, BmiResponse, ErrorResponse, IdealWeight};
pub use crate::services::{BmiApiClient, BmiApiError};
