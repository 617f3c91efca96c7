//! # Inline Formatting
//!
//! Wraps a text selection in an inline tag pair.
//!
//! Offsets are byte offsets and must lie on char boundaries with
//! `start <= end <= text.len()`. The UI issues only valid ranges by
//! construction, so violations are a caller bug and are checked with debug
//! assertions only.

use serde::{Deserialize, Serialize};

/// Inline tags offered by the formatting toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineTag {
    #[serde(rename = "h1")]
    Heading1,
    #[serde(rename = "strong")]
    Strong,
}

impl InlineTag {
    pub fn name(&self) -> &'static str {
        match self {
            InlineTag::Heading1 => "h1",
            InlineTag::Strong => "strong",
        }
    }
}

/// Wrap `text[start..end]` in `<tag>`/`</tag>`
///
/// Returns a new string; the input is untouched. A zero-length selection
/// inserts an empty tag pair at the cursor.
pub fn wrap_selection(text: &str, start: usize, end: usize, tag: &str) -> String {
    debug_assert!(start <= end && end <= text.len());

    format!(
        "{}<{tag}>{}</{tag}>{}",
        &text[..start],
        &text[start..end],
        &text[end..]
    )
}

/// Caret offset just past the opening tag after a wrap at `start`
///
/// Computed from the rendered opening tag's length rather than a fixed
/// overhead, so it stays correct for any tag name.
pub fn caret_after_wrap(start: usize, tag: &str) -> usize {
    start + format!("<{tag}>").len()
}
