//! Error handling for snapshot generation.
//!
//! - **Error Categories**: coarse classification for logs and messaging
//! - **Service Errors**: the model-service call failed
//! - **Generation Errors**: everything that can end a run, including empty
//!   answers and parse failures
//!
//! | Kind | Variant | Fails |
//! |------|---------|-------|
//! | No usable text | `GenerationError::EmptyResponse` | the whole run (overview, area list, single-call answer) |
//! | Malformed text | `GenerationError::Parse` | the whole run |
//! | Call failed | `GenerationError::Service` | the whole run |
//!
//! A missing per-area explanation in the multi-call pipeline is not an
//! error; that one card is left without subtopics.

mod category;
mod generation;
mod service;

pub use category::ErrorCategory;
pub use generation::{GenerationError, GenerationResult, FALLBACK_ERROR_MESSAGE};
pub use service::ServiceError;
