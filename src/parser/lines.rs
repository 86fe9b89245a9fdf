//! Newline-delimited parsing for the multi-call pipeline.

use super::ParseError;
use crate::models::ContentItem;

/// Parse the "main content areas" answer into area names.
///
/// Lines are trimmed and blank lines dropped. Fewer areas than were asked for
/// is accepted; none at all is an error.
pub fn parse_content_areas(raw: &str) -> Result<Vec<String>, ParseError> {
    let areas: Vec<String> = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if areas.is_empty() {
        return Err(ParseError::new(raw, "no content areas found"));
    }

    Ok(areas)
}

/// Parse a detailed explanation into subtopic lines.
///
/// Lines are kept exactly as returned, blank ones included.
pub fn parse_subtopics(raw: &str) -> Vec<String> {
    raw.split('\n').map(str::to_string).collect()
}

/// Pair each area with its parsed explanation.
///
/// `details[i]` belongs to `areas[i]`; a `None` detail (the model gave no
/// text for that area) produces an item with no subtopics.
pub fn build_area_items(areas: Vec<String>, details: Vec<Option<String>>) -> Vec<ContentItem> {
    let mut details = details.into_iter();
    areas
        .into_iter()
        .map(|area| {
            let subtopics = details
                .next()
                .flatten()
                .map(|text| parse_subtopics(&text))
                .unwrap_or_default();
            ContentItem::with_subtopics(area, subtopics)
        })
        .collect()
}
