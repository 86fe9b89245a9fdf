//! Common test utilities for integration tests.
//!
//! Scripted model fixtures and helpers for collecting published states.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{multi_call_model, collect_until_terminal};
//!
//! let model = multi_call_model(&["One", "Two", "Three"]);
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use snapshot::adapters::mock::{ScriptedModelService, ScriptedReply};
use snapshot::{ContentGenerator, GenerationStrategy, StateTransition, UiState};
use tokio::sync::broadcast;

/// Prompt fragments that pick out each pipeline call.
pub const OVERVIEW_PROMPT: &str = "Give a concise overview";
pub const AREAS_PROMPT: &str = "main content areas";
pub const SNAPSHOT_PROMPT: &str = "Respond with a JSON array";

/// Upper bound for any single wait in these tests.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fragment that matches the explanation prompt for `area`.
pub fn detail_prompt(area: &str) -> String {
    format!("explain \"{}\"", area)
}

/// A model scripted for the multi-call pipeline: an overview, the given
/// areas, and a two-line explanation per area.
pub fn multi_call_model(areas: &[&str]) -> ScriptedModelService {
    let model = ScriptedModelService::new();
    model
        .reply_when(OVERVIEW_PROMPT, ScriptedReply::text("An overview."))
        .reply_when(AREAS_PROMPT, ScriptedReply::text(areas.join("\n")));
    for area in areas {
        model.reply_when(
            &detail_prompt(area),
            ScriptedReply::text(format!("{} first\n{} second", area, area)),
        );
    }
    model
}

/// Strategy B answer with one card per title.
pub fn cards_json(titles: &[&str]) -> String {
    let cards: Vec<serde_json::Value> = titles
        .iter()
        .map(|title| serde_json::json!({ "title": title, "summary": format!("About {}", title) }))
        .collect();
    serde_json::Value::Array(cards).to_string()
}

pub fn generator(model: &ScriptedModelService, strategy: GenerationStrategy) -> ContentGenerator {
    ContentGenerator::new(Arc::new(model.clone()), strategy)
}

/// Receive transitions until `terminal_count` terminal states have arrived.
pub async fn collect_transitions(
    rx: &mut broadcast::Receiver<StateTransition>,
    terminal_count: usize,
) -> Vec<StateTransition> {
    let mut seen = Vec::new();
    let mut terminals = 0;
    while terminals < terminal_count {
        let transition = tokio::time::timeout(TEST_TIMEOUT, rx.recv())
            .await
            .expect("timed out waiting for a transition")
            .expect("transition channel closed");
        if transition.state.is_terminal() {
            terminals += 1;
        }
        seen.push(transition);
    }
    seen
}

/// Run one generation to completion and return every state it published.
pub async fn run_to_completion(generator: &ContentGenerator, topic: &str) -> Vec<UiState> {
    let mut rx = generator.observer().subscribe();
    let handle = generator
        .generate_content(topic)
        .expect("tests run inside a tokio runtime");
    let transitions = collect_transitions(&mut rx, 1).await;
    handle.await.expect("generation task panicked");
    transitions.into_iter().map(|t| t.state).collect()
}
