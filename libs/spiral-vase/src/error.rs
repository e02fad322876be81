//! # Vase Errors
//!
//! Error types for vase generation. Validation happens before any sampling,
//! so an error never comes with a partial mesh.

use thiserror::Error;

/// Errors that can occur while generating or exporting a vase.
#[derive(Debug, Error)]
pub enum VaseError {
    /// A structural parameter precondition was violated.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in [`crate::VaseParams`]
        name: &'static str,
        /// Offending value, rendered for display
        value: String,
        /// Which precondition failed
        reason: &'static str,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many faces
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces { count: usize, max: usize },

    /// Parameter record could not be decoded by the host
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writing an exchange format failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VaseError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns true for input validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::TooManyVertices { .. } | Self::TooManyFaces { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = VaseError::invalid_parameter("layers", -1, "must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `layers` = -1: must be non-negative"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_error_is_not_validation() {
        let err: VaseError = std::io::Error::other("disk full").into();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("disk full"));
    }
}
