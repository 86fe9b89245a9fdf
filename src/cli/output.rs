//! Line-based rendering of state transitions and snapshot cards.

use crate::markdown::render_plain_lines;
use crate::models::{ContentBody, ContentItem, StateTransition, UiState};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// One status line for a published state.
///
/// ```text
/// [12:04:31.207] ⋯ loading
/// [12:04:33.918] ✓ success (3 snapshots)
/// ```
pub fn transition_line(transition: &StateTransition) -> String {
    let time = transition.published_at.format("%H:%M:%S%.3f");
    let detail = match &transition.state {
        UiState::Initial => "· initial".to_string(),
        UiState::Loading => "⋯ loading".to_string(),
        UiState::Success(items) => format!("✓ success ({} snapshots)", items.len()),
        UiState::Error(message) => format!("✗ error: {}", message),
    };
    format!("[{}] {}", time, detail)
}

/// Render cards as display lines.
///
/// ```text
/// 1. What it is
/// ────────────────────────────────────────────────────────────
///   Rust is a systems language.
/// ```
pub fn render_items(items: &[ContentItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["(no snapshots)".to_string()];
    }

    let mut lines = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{}. {}", index + 1, item.title()));
        lines.push("─".repeat(LINE_WIDTH));

        match item.body() {
            ContentBody::Summary(summary) => {
                lines.extend(render_plain_lines(summary).into_iter().map(indent));
            }
            ContentBody::Subtopics(subtopics) if subtopics.is_empty() => {
                lines.push(indent("(no details)".to_string()));
            }
            ContentBody::Subtopics(subtopics) => {
                lines.extend(subtopics.iter().map(|s| indent(format!("• {}", s))));
            }
        }
    }
    lines
}

fn indent(line: String) -> String {
    if line.is_empty() {
        line
    } else {
        format!("  {}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_transition_lines() {
        let id = Uuid::new_v4();
        let loading = transition_line(&StateTransition::new(id, UiState::Loading));
        assert!(loading.starts_with('['));
        assert!(loading.ends_with("⋯ loading"));

        let error = transition_line(&StateTransition::new(id, UiState::Error("nope".into())));
        assert!(error.ends_with("✗ error: nope"));

        let success = transition_line(&StateTransition::new(
            id,
            UiState::Success(vec![ContentItem::with_summary("a", "b")]),
        ));
        assert!(success.ends_with("✓ success (1 snapshots)"));
    }

    #[test]
    fn test_render_summary_card() {
        let lines = render_items(&[ContentItem::with_summary(
            "What it is",
            "Rust is **fast**.\n\nAlso safe.",
        )]);
        assert_eq!(lines[0], "1. What it is");
        assert_eq!(lines[1], "─".repeat(LINE_WIDTH));
        assert_eq!(&lines[2..], ["  Rust is fast.", "", "  Also safe."]);
    }

    #[test]
    fn test_render_subtopic_cards() {
        let lines = render_items(&[
            ContentItem::with_subtopics("One", vec!["a".into(), "b".into()]),
            ContentItem::with_subtopics("Two", vec![]),
        ]);
        assert_eq!(lines[2], "  • a");
        assert_eq!(lines[3], "  • b");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "2. Two");
        assert_eq!(lines[7], "  (no details)");
    }

    #[test]
    fn test_render_no_items() {
        assert_eq!(render_items(&[]), vec!["(no snapshots)"]);
    }
}
