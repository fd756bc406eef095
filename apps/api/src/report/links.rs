//! Inline markdown link parsing for recommendation items.
//!
//! Only the `[text](url)` form is recognized; everything else is literal text.

use std::sync::OnceLock;

use regex::Regex;

use crate::report::escape_html;

static LINK_RE: OnceLock<Regex> = OnceLock::new();

/// A piece of a parsed string: literal text or a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link { text: &'a str, url: &'a str },
}

fn link_regex() -> &'static Regex {
    LINK_RE.get_or_init(|| {
        // Link text may not contain `]`, the URL may not contain `)`.
        Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("markdown link regex is valid")
    })
}

/// Splits `input` into literal text and link segments, preserving order.
/// Empty text between adjacent links is dropped.
pub fn parse_links(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in link_regex().captures_iter(input) {
        let (Some(whole), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(Segment::Text(&input[cursor..whole.start()]));
        }
        segments.push(Segment::Link {
            text: text.as_str(),
            url: url.as_str(),
        });
        cursor = whole.end();
    }

    if cursor < input.len() {
        segments.push(Segment::Text(&input[cursor..]));
    }
    segments
}

/// Renders a string with markdown links as HTML, each link opening in a new tab.
pub fn links_to_html(input: &str) -> String {
    parse_links(input)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => escape_html(text),
            Segment::Link { text, url } => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"link\">{}</a>",
                escape_html(url),
                escape_html(text)
            ),
        })
        .collect()
}
