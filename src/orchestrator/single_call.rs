//! One prompt, one strict JSON answer.

use tracing::debug;

use super::enhance::validate_and_enhance;
use crate::error::{GenerationError, GenerationResult};
use crate::models::ContentItem;
use crate::parser::parse_snapshot_cards;
use crate::prompts;
use crate::traits::ModelService;

pub const SNAPSHOTS_STAGE: &str = "snapshots";

pub(crate) async fn generate(
    model: &dyn ModelService,
    topic: &str,
) -> GenerationResult<Vec<ContentItem>> {
    let text = model
        .generate(&prompts::snapshot_cards(topic))
        .await?
        .ok_or(GenerationError::empty(SNAPSHOTS_STAGE))?;

    let items = parse_snapshot_cards(&text)?;
    debug!(count = items.len(), "Parsed snapshot cards");

    Ok(validate_and_enhance(items))
}
