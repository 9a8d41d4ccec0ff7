//! Error types for catalog processing and backend calls.

/// Result type for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Error type shared by the models, services and configuration layers.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// A catalog record violates one of its invariants.
    #[error("Invalid record '{id}': {message}")]
    InvalidRecord { id: String, message: String },

    /// Two catalog records share the same identifier.
    #[error("Duplicate exoplanet id: {0}")]
    DuplicateId(String),

    /// The projector was handed a distance below zero.
    #[error("Distance must be non-negative, got {0} pc")]
    NegativeDistance(f64),

    /// Any other out-of-domain numeric input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration file or environment could not be read.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The external ML backend could not be reached.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ExplorerError {
    /// Create an invalid record error.
    pub fn invalid_record(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecord { .. }
                | Self::DuplicateId(_)
                | Self::NegativeDistance(_)
                | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = ExplorerError::invalid_record("kepler-22b", "radius must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid record 'kepler-22b': radius must be positive"
        );
    }

    #[test]
    fn test_negative_distance_display() {
        let err = ExplorerError::NegativeDistance(-3.5);
        assert!(err.to_string().contains("-3.5"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ExplorerError::invalid_input("bad").is_client_error());
        assert!(ExplorerError::DuplicateId("x".into()).is_client_error());
        assert!(!ExplorerError::Upstream("down".into()).is_client_error());
        assert!(!ExplorerError::NotFound("x".into()).is_client_error());
    }
}
