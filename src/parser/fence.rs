//! Fenced code block detection
//!
//! Structural headings are only recognized outside of fences; a `## Example`
//! line inside a fenced block belongs to the text around it.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static FENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*```[^\n]*\n[\s\S]*?^[ \t]*```").expect("constant regex pattern is valid")
});

/// Byte ranges `[start, end)` of every fenced code block in `text`, in order.
///
/// A fence opens on a line starting with three backticks and closes at the
/// next such line. An opening fence that is never closed yields no span.
pub fn fence_spans(text: &str) -> Vec<Range<usize>> {
    let spans: Vec<Range<usize>> = FENCE_PATTERN
        .find_iter(text)
        .map(|m| m.start()..m.end())
        .collect();
    tracing::trace!(count = spans.len(), "scanned code fences");
    spans
}

/// Whether `pos` falls inside any of `spans`.
pub fn in_fence(pos: usize, spans: &[Range<usize>]) -> bool {
    spans.iter().any(|span| span.contains(&pos))
}
