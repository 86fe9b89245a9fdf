//! Converts raw model text into validated content records.
//!
//! Two wire formats are supported, one per generation strategy:
//!
//! - [`lines`] - newline-delimited area names and subtopic lines, used by the
//!   multi-call pipeline
//! - [`json`] - a bare JSON array of `{title, summary}` objects, used by the
//!   single-call pipeline
//!
//! Both fail with [`ParseError`], which keeps the raw text for diagnostics.

pub mod json;
pub mod lines;

pub use json::{encode_snapshot_cards, parse_snapshot_cards, SnapshotCard};
pub use lines::{build_area_items, parse_content_areas, parse_subtopics};

use thiserror::Error;

/// Model text was present but did not match the expected format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse model response: {reason}")]
pub struct ParseError {
    /// The full text returned by the model
    pub raw: String,
    /// What was wrong with it
    pub reason: String,
}

impl ParseError {
    pub fn new(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
