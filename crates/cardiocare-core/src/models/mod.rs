//! Domain models for the cardiocare system.

mod diagnosis;
mod patient;
mod report;

pub use diagnosis::*;
pub use patient::*;
pub use report::*;

use thiserror::Error;

/// Data-entry validation errors.
///
/// Raised when a clinical value falls outside its documented range.
/// Validation happens when a record is constructed, never at diagnosis time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
