use thiserror::Error;

/// Rejected layout or timing input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("radius {axis} must be finite and non-negative, got {value}")]
    InvalidRadius { axis: &'static str, value: f32 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidTiming { field: &'static str, value: f64 },

    #[error("duplicate card id `{0}`")]
    DuplicateCard(&'static str),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Accept a finite, non-negative duration in seconds.
pub fn check_timing(field: &'static str, value: f64) -> LayoutResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidTiming { field, value })
    }
}

pub fn check_radius(axis: &'static str, value: f32) -> LayoutResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidRadius { axis, value })
    }
}
