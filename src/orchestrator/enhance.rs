use crate::models::ContentItem;

/// Post-processing hook run on every successful result before it is
/// published.
///
/// Currently a pass-through: items are returned unchanged and in order.
/// Validation or enrichment of generated cards goes here, so it can be added
/// without changing the generator's public contract.
pub fn validate_and_enhance(items: Vec<ContentItem>) -> Vec<ContentItem> {
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through() {
        let items = vec![
            ContentItem::with_summary("B", "second"),
            ContentItem::with_subtopics("A", vec![String::new()]),
        ];
        assert_eq!(validate_and_enhance(items.clone()), items);
        assert!(validate_and_enhance(Vec::new()).is_empty());
    }
}
