//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ModelService`] - prompt in, text out
//! - [`HttpClient`] - HTTP transport used by the model service adapter

pub mod http;
pub mod model;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use model::ModelService;
