// Core exports
pub mod coerce;
pub mod meter;

pub use coerce::{parse_float, parse_int};
pub use meter::{format_px, indicator_offset, INDICATOR_INSET, MAX_BMI, MIN_BMI};
