use serde::{Deserialize, Serialize};

/// Body of a generated snapshot card.
///
/// A generation strategy always produces one shape: the single-call pipeline
/// yields `Summary`, the multi-call pipeline yields `Subtopics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBody {
    /// Markdown-formatted prose explaining the title
    Summary(String),
    /// Ordered subtopic lines for a content area
    Subtopics(Vec<String>),
}

/// One displayable unit of generated content (a "snapshot").
///
/// Fields are private so an item cannot change after construction.
/// Serializes as `{"title": .., "summary": ..}` or
/// `{"title": .., "subtopics": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    title: String,
    #[serde(flatten)]
    body: ContentBody,
}

impl ContentItem {
    /// Create an item with a markdown summary body
    pub fn with_summary(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: ContentBody::Summary(summary.into()),
        }
    }

    /// Create an item with a subtopic list body
    pub fn with_subtopics(title: impl Into<String>, subtopics: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: ContentBody::Subtopics(subtopics),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &ContentBody {
        &self.body
    }

    /// The summary text, if this item carries one
    pub fn summary(&self) -> Option<&str> {
        match &self.body {
            ContentBody::Summary(text) => Some(text),
            ContentBody::Subtopics(_) => None,
        }
    }

    /// The subtopic lines, if this item carries them
    pub fn subtopics(&self) -> Option<&[String]> {
        match &self.body {
            ContentBody::Subtopics(lines) => Some(lines),
            ContentBody::Summary(_) => None,
        }
    }
}
