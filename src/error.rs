use noisy_float::types::R64;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteeringError {
    #[error("invalid servo range: min_angle {min_angle} must be less than max_angle {max_angle}")]
    InvalidRange { min_angle: f64, max_angle: f64 },

    #[error("non-finite value {value} for {field}")]
    NonFiniteInput { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, SteeringError>;

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    R64::try_new(value)
        .map(|val| val.raw())
        .ok_or(SteeringError::NonFiniteInput { field, value })
}
