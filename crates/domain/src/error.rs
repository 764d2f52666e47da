//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ScanGateError`] via `#[from]`.

use crate::id::{ScannerId, StationId};

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum ScanGateError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("unauthorized")]
    Unauthorized(#[from] UnauthorizedError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The request did not carry what the operation needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more of the required fields was absent or empty.
    #[error("Missing required fields")]
    MissingFields { fields: Vec<&'static str> },

    /// An identifier was constructed from an empty string.
    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),
}

/// The scanner is not allowed to operate at the requested station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid scanner for this station")]
pub struct UnauthorizedError {
    pub scanner_id: ScannerId,
    pub station_id: StationId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_missing_fields_message() {
        let err = ValidationError::MissingFields {
            fields: vec!["stationId"],
        };
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn should_display_unauthorized_message() {
        let err = UnauthorizedError {
            scanner_id: ScannerId::new("S1"),
            station_id: StationId::new("ST1"),
        };
        assert_eq!(err.to_string(), "Invalid scanner for this station");
    }

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: ScanGateError = ValidationError::EmptyIdentifier("scannerId").into();
        assert!(matches!(
            err,
            ScanGateError::Validation(ValidationError::EmptyIdentifier("scannerId"))
        ));
    }
}
