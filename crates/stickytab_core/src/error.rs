//! Core error types

use thiserror::Error;

/// Errors raised when collaborator metrics are constructed from untrusted input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StickyError {
    /// A height or inset was negative or not finite
    #[error("Invalid {name}: {value} (must be finite and >= 0)")]
    InvalidMetric { name: &'static str, value: f32 },

    /// The pinned height exceeds the full header height
    #[error("Pinned height {pinned} exceeds header height {height}")]
    PinnedExceedsHeight { pinned: f32, height: f32 },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, StickyError>;

/// Validate a non-negative, finite metric
pub fn check_metric(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StickyError::InvalidMetric { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_metric() {
        assert_eq!(check_metric("height", 12.0), Ok(12.0));
        assert!(check_metric("height", -1.0).is_err());
        assert!(check_metric("height", f32::NAN).is_err());

        let err = check_metric("hero height", f32::INFINITY).unwrap_err();
        assert!(err.to_string().contains("hero height"));
    }
}
