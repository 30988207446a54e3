//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding input validation and configuration failures.
///
/// The dashboard controller turns request failures into notices; `Api` is for
/// callers that talk to the client directly.
#[derive(Debug)]
pub enum DashboardError {
    /// An error from the underlying API client.
    Api(recipes_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// Runtime configuration is unusable.
    Config(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<recipes_api::Error> for DashboardError {
    fn from(e: recipes_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn api_error_converts_and_keeps_source() {
        let err: DashboardError = recipes_api::Error::Api {
            status: 404,
            message: "Recipe not found".to_string(),
        }
        .into();
        assert!(matches!(err, DashboardError::Api(_)));
        assert_eq!(err.to_string(), "API error: API error (404): Recipe not found");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("API error (404): Recipe not found".to_string())
        );
    }

    #[test]
    fn local_errors_have_no_source() {
        let err = DashboardError::InvalidInput("page must be >= 1".to_string());
        assert_eq!(err.to_string(), "Invalid input: page must be >= 1");
        assert!(err.source().is_none());
        assert!(DashboardError::Config("bad".to_string()).source().is_none());
    }
}
