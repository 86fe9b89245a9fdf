//! The error type a generation run can end in.

use thiserror::Error;

use super::category::ErrorCategory;
use super::service::ServiceError;
use crate::parser::ParseError;

/// Shown when a failure has no usable description.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Any failure that ends a generation run.
///
/// All variants are caught at the top of the run and turned into
/// `UiState::Error(user_message())`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The model returned no usable text where text was required.
    /// `stage` names what was being generated, e.g. "topic overview".
    #[error("Failed to generate {stage}")]
    EmptyResponse { stage: &'static str },

    /// Text was present but malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The model-service call itself failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl GenerationError {
    pub fn empty(stage: &'static str) -> Self {
        GenerationError::EmptyResponse { stage }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GenerationError::EmptyResponse { .. } => ErrorCategory::Server,
            GenerationError::Parse(_) => ErrorCategory::Client,
            GenerationError::Service(err) => err.category(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GenerationError::EmptyResponse { .. } => "GEN_EMPTY_RESPONSE",
            GenerationError::Parse(_) => "GEN_PARSE",
            GenerationError::Service(err) => err.error_code(),
        }
    }

    /// The message published to the UI.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Type alias for Results of generation steps.
pub type GenerationResult<T> = Result<T, GenerationError>;
