//! Error taxonomy for conversion entry points.

use thiserror::Error;

/// Result type for conversion entry points.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors that block an entire conversion batch.
///
/// Zone-level problems (missing exposed or floor area) are not errors: they
/// degrade to a zero output plus a warning in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Bad input data: negative flow rate or no zones supplied.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The host model environment is missing or not ready. Distinct from
    /// `InvalidInput` because it points at a missing collaborator, not bad
    /// data.
    #[error("host environment unavailable: {0}")]
    HostUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ConvertError::InvalidInput("air flow rate must not be negative".to_string());
        assert_eq!(
            e.to_string(),
            "invalid input: air flow rate must not be negative"
        );

        let e = ConvertError::HostUnavailable("host model is not loaded".to_string());
        assert!(e.to_string().starts_with("host environment unavailable"));
    }
}
