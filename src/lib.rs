//! Snapshot - short learning cards for a topic, generated by a language model.
//!
//! [`ContentGenerator`] runs a generation pipeline against a [`traits::ModelService`]
//! and publishes its progress as [`UiState`] values that any number of
//! [`StateObserver`]s can read.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod prompts;
pub mod state;
pub mod traits;

pub use config::GeneratorConfig;
pub use error::{GenerationError, ServiceError};
pub use models::{ContentBody, ContentItem, StateTransition, UiState};
pub use orchestrator::{ContentGenerator, GenerationStrategy};
pub use state::StateObserver;
