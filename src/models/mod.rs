//! Data records shared between the orchestrator and presentation.

mod content;
mod ui_state;

pub use content::{ContentBody, ContentItem};
pub use ui_state::{StateTransition, UiState};
