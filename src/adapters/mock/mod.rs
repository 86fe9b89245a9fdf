//! Mock implementations for testing.
//!
//! These let the orchestrator and the model adapter be tested without
//! network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedModelService`] - model service with scripted replies

pub mod http;
pub mod model;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use model::{ScriptedModelService, ScriptedReply};
