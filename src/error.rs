use thiserror::Error;

/// Precondition failures detected before any candidate is scored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} range: min {min} is greater than max {max}")]
    InvertedRange {
        field: &'static str,
        min: u16,
        max: u16,
    },
}
