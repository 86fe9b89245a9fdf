use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContentItem;

/// The state a snapshot screen renders.
///
/// Exactly one variant is current at any time. `Initial` only exists before
/// the first request; every request moves through `Loading` to either
/// `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum UiState {
    /// No request has been made yet
    #[default]
    Initial,
    /// A generation request is in flight
    Loading,
    /// Generated cards, in display order. May be empty if the model
    /// returned nothing usable.
    Success(Vec<ContentItem>),
    /// Human-readable failure description
    Error(String),
}

impl UiState {
    /// True for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, UiState::Success(_) | UiState::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Short lowercase name, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            UiState::Initial => "initial",
            UiState::Loading => "loading",
            UiState::Success(_) => "success",
            UiState::Error(_) => "error",
        }
    }

    /// Generated cards if this is a `Success`.
    pub fn items(&self) -> Option<&[ContentItem]> {
        match self {
            UiState::Success(items) => Some(items),
            _ => None,
        }
    }

    /// Failure message if this is an `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// One published state change, tagged with the request that caused it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTransition {
    /// Request that published this state
    pub request_id: Uuid,
    /// The newly published state
    pub state: UiState,
    /// When it was published
    pub published_at: DateTime<Utc>,
}

impl StateTransition {
    /// Create a transition stamped with the current time.
    pub fn new(request_id: Uuid, state: UiState) -> Self {
        Self {
            request_id,
            state,
            published_at: Utc::now(),
        }
    }
}
