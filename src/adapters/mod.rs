//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`GeminiModelService`] - generative-language REST API over any `HttpClient`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::ScriptedModelService`] - Scripted model replies

pub mod gemini;
pub mod mock;
pub mod reqwest_http;

pub use gemini::GeminiModelService;
pub use mock::{MockHttpClient, ScriptedModelService};
pub use reqwest_http::ReqwestHttpClient;
