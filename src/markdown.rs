//! Plain-text rendering of markdown summaries.
//!
//! Snapshot summaries are markdown. The command-line driver prints them as
//! plain lines: emphasis markers are dropped, list items get a bullet or
//! their number, quotes keep a `> ` prefix and code blocks are indented.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Render markdown into plain display lines.
///
/// Blocks are separated by one blank line; trailing blank lines are removed.
pub fn render_plain_lines(markdown: &str) -> Vec<String> {
    let parser = Parser::new(markdown);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    // One entry per open list: next number for ordered lists, None for bullets
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut quote_depth: usize = 0;
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::List(start) => {
                    flush(&mut lines, &mut current, quote_depth);
                    list_stack.push(start);
                }
                Tag::Item => {
                    flush(&mut lines, &mut current, quote_depth);
                    let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                    let marker = match list_stack.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{}. ", n);
                            *n += 1;
                            marker
                        }
                        _ => "• ".to_string(),
                    };
                    current.push_str(&indent);
                    current.push_str(&marker);
                }
                Tag::BlockQuote(_) => {
                    flush(&mut lines, &mut current, quote_depth);
                    quote_depth += 1;
                }
                Tag::CodeBlock(_) => {
                    flush(&mut lines, &mut current, quote_depth);
                    in_code_block = true;
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Paragraph | TagEnd::Heading(_) => {
                    flush(&mut lines, &mut current, quote_depth);
                    if list_stack.is_empty() {
                        lines.push(String::new());
                    }
                }
                TagEnd::Item => flush(&mut lines, &mut current, quote_depth),
                TagEnd::List(_) => {
                    list_stack.pop();
                    if list_stack.is_empty() {
                        lines.push(String::new());
                    }
                }
                TagEnd::BlockQuote(_) => {
                    quote_depth = quote_depth.saturating_sub(1);
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    lines.push(String::new());
                }
                _ => {}
            },
            Event::Text(text) if in_code_block => {
                for line in text.lines() {
                    lines.push(format!("    {}", line));
                }
            }
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak => current.push(' '),
            Event::HardBreak => flush(&mut lines, &mut current, quote_depth),
            _ => {}
        }
    }

    flush(&mut lines, &mut current, quote_depth);
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn flush(lines: &mut Vec<String>, current: &mut String, quote_depth: usize) {
    if current.trim().is_empty() {
        current.clear();
        return;
    }
    let text = std::mem::take(current);
    lines.push(format!("{}{}", "> ".repeat(quote_depth), text.trim_end()));
}
