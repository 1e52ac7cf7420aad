use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("valid URL pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Splits chat text into literal runs and URLs, in order. Line breaks stay inside `Text`.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for found in URL_PATTERN.find_iter(text) {
        if found.start() > cursor {
            out.push(Segment::Text(&text[cursor..found.start()]));
        }
        out.push(Segment::Link(found.as_str()));
        cursor = found.end();
    }
    if cursor < text.len() {
        out.push(Segment::Text(&text[cursor..]));
    }
    out
}
