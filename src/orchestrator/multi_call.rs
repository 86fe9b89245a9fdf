//! Overview → areas → per-area explanations.

use tracing::{debug, warn};

use super::enhance::validate_and_enhance;
use crate::error::{GenerationError, GenerationResult};
use crate::models::ContentItem;
use crate::parser::{build_area_items, parse_content_areas};
use crate::prompts;
use crate::traits::ModelService;

pub const OVERVIEW_STAGE: &str = "topic overview";
pub const AREAS_STAGE: &str = "main content areas";

/// Run the multi-call pipeline for `topic`.
///
/// Calls are issued strictly one at a time. A missing overview or area list
/// fails the run; a missing explanation only empties that area's card.
pub(crate) async fn generate(
    model: &dyn ModelService,
    topic: &str,
) -> GenerationResult<Vec<ContentItem>> {
    let overview = model
        .generate(&prompts::topic_overview(topic))
        .await?
        .ok_or(GenerationError::empty(OVERVIEW_STAGE))?;
    debug!(chars = overview.len(), "Overview generated");

    let areas_text = model
        .generate(&prompts::main_content_areas(topic, &overview))
        .await?
        .ok_or(GenerationError::empty(AREAS_STAGE))?;
    let areas = parse_content_areas(&areas_text)?;
    if areas.len() != prompts::CONTENT_AREA_COUNT {
        debug!(
            expected = prompts::CONTENT_AREA_COUNT,
            actual = areas.len(),
            "Model returned an unexpected number of areas"
        );
    }

    let mut details = Vec::with_capacity(areas.len());
    for area in &areas {
        let detail = model
            .generate(&prompts::detailed_explanation(topic, area))
            .await?;
        if detail.is_none() {
            warn!(area = %area, "No explanation for area, leaving it empty");
        }
        details.push(detail);
    }

    Ok(validate_and_enhance(build_area_items(areas, details)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{ScriptedModelService, ScriptedReply};
    use crate::error::ServiceError;

    fn scripted() -> ScriptedModelService {
        let model = ScriptedModelService::new();
        model
            .reply_when("Give a concise overview", ScriptedReply::text("Overview text"))
            .reply_when("main content areas", ScriptedReply::text("One\nTwo\nThree"));
        model
    }

    #[tokio::test]
    async fn test_happy_path_builds_three_items() {
        let model = scripted();
        model
            .reply_when("explain \"One\"", ScriptedReply::text("1a\n1b"))
            .reply_when("explain \"Two\"", ScriptedReply::text("2a"))
            .reply_when("explain \"Three\"", ScriptedReply::text("3a"));

        let items = generate(&model, "rust").await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title(), "One");
        assert_eq!(items[0].subtopics().unwrap(), ["1a", "1b"]);
        assert_eq!(model.call_count(), 5);
    }

    #[tokio::test]
    async fn test_prompts_are_chained() {
        let model = scripted();
        model.set_default_reply(ScriptedReply::text("detail"));

        generate(&model, "volcanoes").await.unwrap();

        let prompts = model.prompts();
        assert!(prompts[0].contains("\"volcanoes\""));
        assert!(prompts[1].contains("Overview text"));
        assert!(prompts[2].contains("\"One\""));
        assert!(prompts[3].contains("\"Two\""));
        assert!(prompts[4].contains("\"Three\""));
    }

    #[tokio::test]
    async fn test_missing_overview_stops() {
        let model = ScriptedModelService::new();
        model.reply_when("Give a concise overview", ScriptedReply::Empty);

        let err = generate(&model, "x").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to generate topic overview");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_areas_stops() {
        let model = ScriptedModelService::new();
        model
            .reply_when("Give a concise overview", ScriptedReply::text("o"))
            .reply_when("main content areas", ScriptedReply::Empty);

        let err = generate(&model, "x").await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to generate main content areas");
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_area_list_is_parse_error() {
        let model = ScriptedModelService::new();
        model
            .reply_when("Give a concise overview", ScriptedReply::text("o"))
            .reply_when("main content areas", ScriptedReply::text("\n\n"));

        let err = generate(&model, "x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[tokio::test]
    async fn test_detail_failure_fails_run() {
        let model = scripted();
        model.set_default_reply(ScriptedReply::Fail(ServiceError::Http {
            status: 500,
            message: "boom".to_string(),
        }));

        let err = generate(&model, "x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Service(_)));
        assert_eq!(model.call_count(), 3);
    }
}
