// Model exports
pub mod requests;
pub mod responses;

pub use requests::{BmiRequest, CALCULATE_BMI_PATH};
pub use responses::{BmiResponse, ErrorResponse, IdealWeight};
