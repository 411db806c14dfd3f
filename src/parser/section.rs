//! Heading-bounded section extraction
//!
//! Headings are lines of one or more `#` followed by whitespace and a label.
//! Labels may be wrapped in square brackets (reference-link style), so
//! `# [Setup]` and `# Setup` name the same section. Headings inside fenced
//! code blocks are never structural.

use super::fence::{fence_spans, in_fence};

/// Top-level headings that delimit BUSY sections.
pub const SECTION_NAMES: &[&str] = &[
    "Imports",
    "Import",
    "Local Definitions",
    "Setup",
    "Operations",
    "Operation",
    "Tools",
    "Tool",
    "Triggers",
    "Trigger",
];

/// A heading line found outside of any code fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Byte offset of the first `#`.
    pub offset: usize,
    /// Byte offset just past the heading line (including its newline).
    pub content_start: usize,
    pub level: usize,
    /// Label as written, trimmed, brackets kept.
    pub label: &'a str,
}

impl<'a> Heading<'a> {
    /// The label with reference-link brackets removed.
    pub fn name(&self) -> &'a str {
        unwrap_brackets(self.label)
    }

    fn matches(&self, level: usize, names: &[&str]) -> bool {
        self.level == level && label_matches(self.label, names)
    }
}

/// Strip one pair of surrounding square brackets: `[Name]` becomes `Name`.
pub fn unwrap_brackets(label: &str) -> &str {
    label
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(label)
}

/// Case-sensitive match of a heading label against accepted names, bracketed or not.
pub fn label_matches(label: &str, names: &[&str]) -> bool {
    let inner = unwrap_brackets(label);
    names.contains(&label) || (inner != label && names.contains(&inner))
}

fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let label = rest.trim();
    if label.is_empty() {
        return None;
    }
    Some((level, label))
}

/// All heading lines of `text` that are not inside a code fence, in order.
pub fn headings(text: &str) -> Vec<Heading<'_>> {
    let fences = fence_spans(text);
    let mut found = Vec::new();
    let mut offset = 0;

    for raw_line in text.split_inclusive('\n') {
        let start = offset;
        offset += raw_line.len();

        let line = raw_line.trim_end_matches(['\n', '\r']);
        let Some((level, label)) = parse_heading_line(line) else {
            continue;
        };
        if in_fence(start, &fences) {
            continue;
        }
        found.push(Heading {
            offset: start,
            content_start: offset,
            level,
            label,
        });
    }

    found
}

/// Extract the content of the first `level` heading named one of `names`.
///
/// Content runs to the next heading of the same or a higher level, or to the
/// end of `body`. Returns `None` when no such heading exists.
pub fn extract_section<'a>(body: &'a str, level: usize, names: &[&str]) -> Option<&'a str> {
    extract_section_until(body, level, names, |h| h.level <= level)
}

/// Extract a top-level section that may embed arbitrary markdown.
///
/// Only a top-level heading of a different BUSY section ends it, so a stray
/// `# Title` inside operation text stays in the section and a repeated
/// `# Operations` heading folds its items into the first one.
pub fn extract_block_section<'a>(body: &'a str, names: &[&str]) -> Option<&'a str> {
    extract_section_until(body, 1, names, |h| {
        h.level == 1 && label_matches(h.label, SECTION_NAMES) && !label_matches(h.label, names)
    })
}

fn extract_section_until<'a>(
    body: &'a str,
    level: usize,
    names: &[&str],
    ends_section: impl Fn(&Heading<'_>) -> bool,
) -> Option<&'a str> {
    let found = headings(body);
    let index = found.iter().position(|h| h.matches(level, names))?;
    let start = found[index].content_start;
    let end = found[index + 1..]
        .iter()
        .find(|h| ends_section(h))
        .map_or(body.len(), |h| h.offset);

    Some(&body[start..end])
}

/// Split `region` into items, one per heading of exactly `level`.
///
/// Each item is `(name, content)` where the name has brackets removed and
/// the content runs from after the heading line to the next item heading.
/// Text before the first item heading is ignored.
pub fn split_items(region: &str, level: usize) -> Vec<(&str, &str)> {
    let found: Vec<Heading<'_>> = headings(region)
        .into_iter()
        .filter(|h| h.level == level)
        .collect();

    found
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let end = found.get(i + 1).map_or(region.len(), |next| next.offset);
            (heading.name(), &region[heading.content_start..end])
        })
        .collect()
}

/// Text before the first heading of `level` or higher (fence-aware).
pub fn leading_text(region: &str, level: usize) -> &str {
    let end = headings(region)
        .iter()
        .find(|h| h.level <= level)
        .map_or(region.len(), |h| h.offset);
    &region[..end]
}
