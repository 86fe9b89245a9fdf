//! Prompt templates sent to the model service.
//!
//! Wording is tunable. The output-format section of [`snapshot_cards`] is
//! not: `parser::json` relies on the model answering with a bare JSON array
//! of `{title, summary}` objects and nothing else.

/// Number of content areas the multi-call pipeline asks for.
pub const CONTENT_AREA_COUNT: usize = 3;

/// Approximate length of each per-area explanation.
pub const DETAIL_WORD_COUNT: usize = 100;

/// Step 1 of the multi-call pipeline.
pub fn topic_overview(topic: &str) -> String {
    format!(
        "Give a concise overview of the topic \"{topic}\" in a few sentences, \
         suitable for a curious learner."
    )
}

/// Step 2 of the multi-call pipeline: one area name per line.
pub fn main_content_areas(topic: &str, overview: &str) -> String {
    format!(
        "Here is an overview of the topic \"{topic}\":\n\n{overview}\n\n\
         Based on this overview, list exactly {CONTENT_AREA_COUNT} main content areas \
         someone should learn about \"{topic}\". Return only the area names, \
         one per line, with no numbering, bullets or extra text."
    )
}

/// Step 3 of the multi-call pipeline, issued once per area.
pub fn detailed_explanation(topic: &str, area: &str) -> String {
    format!(
        "In the context of \"{topic}\", explain \"{area}\" in about \
         {DETAIL_WORD_COUNT} words. Put each subtopic or key point on its own line."
    )
}

/// The only prompt of the single-call pipeline.
pub fn snapshot_cards(topic: &str) -> String {
    format!(
        "You create short, swipeable learning snapshots.\n\
         Topic: \"{topic}\"\n\n\
         Write 4 to 6 snapshots that together explain the topic. Use a friendly, \
         clear tone for a curious non-expert.\n\n\
         Each summary may use Markdown: **bold**, *italic*, bullet lists, \
         numbered lists and short > quotes. Keep each summary under 120 words.\n\n\
         OUTPUT FORMAT (strict):\n\
         - Respond with a JSON array and nothing else.\n\
         - Each element is an object with exactly two string fields: \"title\" and \"summary\".\n\
         - Do not wrap the array in Markdown code fences.\n\
         - Do not add any text before or after the array.\n\n\
         Example:\n\
         [{{\"title\": \"What it is\", \"summary\": \"A **short** explanation.\"}}]"
    )
}
