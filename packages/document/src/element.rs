use serde::{Deserialize, Serialize};

/// Tag kind of a document element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "ol")]
    OrderedList,
    #[serde(rename = "ul")]
    UnorderedList,
}

impl ElementKind {
    /// HTML tag name this kind renders as
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Paragraph => "p",
            ElementKind::OrderedList => "ol",
            ElementKind::UnorderedList => "ul",
        }
    }
}

/// One element of the assembled document
///
/// `id` is immutable once created; only `content` changes over the element's
/// lifetime. Position in the owning sequence is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub content: String,
}

impl Element {
    /// Create an element with empty content
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
