use crate::problem::ProblemDetails;
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for Paymenter client operations
pub type Result<T> = std::result::Result<T, PaymenterError>;

/// Error taxonomy for Paymenter API operations.
///
/// Every non-2xx response is classified into exactly one variant based on
/// its status code and body shape; transport failures land in `Network`.
/// Callers can branch on the variant without string-matching messages.
#[derive(Debug, Error)]
pub enum PaymenterError {
    /// Any non-2xx response not otherwise classified
    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
        details: Option<ProblemDetails>,
    },

    /// The server returned 401
    #[error("authentication failed: {message}")]
    Authentication {
        message: String,
        status: u16,
        details: Option<ProblemDetails>,
    },

    /// The server returned 403
    #[error("authorization failed: {message}")]
    Authorization {
        message: String,
        status: u16,
        details: Option<ProblemDetails>,
    },

    /// The server returned 404
    #[error("not found: {message}")]
    NotFound {
        message: String,
        status: u16,
        details: Option<ProblemDetails>,
    },

    /// The server returned 400/422 with a structurally valid field-error map
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        status: u16,
        /// Field name -> error messages, in server order
        validation_errors: HashMap<String, Vec<String>>,
        details: ProblemDetails,
    },

    /// Transport-level failure (DNS, connect, TLS, timeout, abort) or any
    /// failure not already classified above; carries no status code
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid client configuration or request construction
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl PaymenterError {
    /// Create a new network error wrapping a low-level failure
    pub fn network<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            Self::Authentication { status, .. }
            | Self::Authorization { status, .. }
            | Self::NotFound { status, .. }
            | Self::Validation { status, .. } => Some(*status),
            Self::Network { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    /// Structured error detail from the response body, if any
    pub fn details(&self) -> Option<&ProblemDetails> {
        match self {
            Self::Api { details, .. }
            | Self::Authentication { details, .. }
            | Self::Authorization { details, .. }
            | Self::NotFound { details, .. } => details.as_ref(),
            Self::Validation { details, .. } => Some(details),
            Self::Network { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<reqwest::Error> for PaymenterError {
    fn from(error: reqwest::Error) -> Self {
        Self::network(error)
    }
}

impl From<url::ParseError> for PaymenterError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidConfig {
            message: format!("invalid request URL: {}", error),
        }
    }
}
