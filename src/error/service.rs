//! Failures of the model-service call itself.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// The model service could not be reached or refused the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("Model service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never completed (connection, timeout, bad URL).
    #[error("Model service request failed: {0}")]
    Transport(#[from] HttpError),

    /// The service answered 2xx but the body could not be decoded.
    #[error("Model service sent an unreadable response: {0}")]
    InvalidResponse(String),

    /// No API key was configured.
    #[error("No API key configured for the model service")]
    MissingApiKey,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::Http { status, .. } if *status == 401 || *status == 403 => {
                ErrorCategory::Auth
            }
            ServiceError::Http { .. } | ServiceError::InvalidResponse(_) => ErrorCategory::Server,
            ServiceError::Transport(_) => ErrorCategory::Network,
            ServiceError::MissingApiKey => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Http { .. } => "SVC_HTTP_STATUS",
            ServiceError::Transport(HttpError::Timeout(_)) => "SVC_TIMEOUT",
            ServiceError::Transport(_) => "SVC_TRANSPORT",
            ServiceError::InvalidResponse(_) => "SVC_INVALID_RESPONSE",
            ServiceError::MissingApiKey => "SVC_NO_API_KEY",
        }
    }
}
