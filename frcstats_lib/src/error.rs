//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding empty-result, incomplete-record and input validation failures.
///
/// Lookups never hand these to callers directly: they are logged and
/// collapsed to `None` at the component boundary.
#[derive(Debug)]
pub enum FrcStatsError {
    /// An error from the underlying API client.
    Api(tba_api::Error),
    /// The data source answered, but with nothing usable (zero events,
    /// zero played matches).
    Empty(String),
    /// A record is missing a field it cannot be used without.
    Incomplete(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for FrcStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Empty(msg) => write!(f, "No data: {}", msg),
            Self::Incomplete(msg) => write!(f, "Incomplete record: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for FrcStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<tba_api::Error> for FrcStatsError {
    fn from(e: tba_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_includes_context() {
        let err = FrcStatsError::Empty("team 254 attended no events in 2019".to_string());
        assert_eq!(err.to_string(), "No data: team 254 attended no events in 2019");
    }

    #[test]
    fn api_error_exposes_source() {
        let err: FrcStatsError = tba_api::Error::RequestFailed.into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "API error: Request failed");
    }

    #[test]
    fn incomplete_record_has_no_source() {
        let err = FrcStatsError::Incomplete("team frc254 has no name".to_string());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Incomplete record: team frc254 has no name");
    }
}
