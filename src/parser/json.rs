//! Strict JSON parsing for the single-call pipeline.
//!
//! The model is instructed to answer with a bare JSON array of objects, each
//! with string `title` and `summary` fields. Markdown code fences are not
//! stripped here: the prompt forbids them, and a fenced answer is a contract
//! violation that surfaces as a [`ParseError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ParseError;
use crate::models::ContentItem;

/// Wire shape of one card in the model's JSON answer.
///
/// Unknown fields are ignored so the prompt can evolve without breaking
/// decoding; `title` and `summary` are required strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCard {
    pub title: String,
    pub summary: String,
}

impl From<SnapshotCard> for ContentItem {
    fn from(card: SnapshotCard) -> Self {
        ContentItem::with_summary(card.title, card.summary)
    }
}

/// Parse the model's answer into summary items, preserving order.
pub fn parse_snapshot_cards(raw: &str) -> Result<Vec<ContentItem>, ParseError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ParseError::new(raw, format!("invalid JSON: {}", e)))?;

    let Value::Array(elements) = value else {
        return Err(ParseError::new(
            raw,
            format!("expected a JSON array, found {}", value_kind(&value)),
        ));
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let card: SnapshotCard = serde_json::from_value(element)
                .map_err(|e| ParseError::new(raw, format!("element {}: {}", index, e)))?;
            if card.title.trim().is_empty() {
                return Err(ParseError::new(
                    raw,
                    format!("element {}: title is empty", index),
                ));
            }
            Ok(ContentItem::from(card))
        })
        .collect()
}

/// Encode cards in the same array shape the parser accepts.
pub fn encode_snapshot_cards(cards: &[SnapshotCard]) -> Result<String, serde_json::Error> {
    serde_json::to_string(cards)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
