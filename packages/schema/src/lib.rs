//! # Blockdoc Schema Projector
//!
//! Projects an element sequence to the schema document shown in the builder's
//! read-only preview region.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Projection is fully deterministic.**
//!
//! For any element sequence, [`project`] produces a value-equal
//! [`SchemaDocument`] on every invocation: no time/random/environment
//! dependence, no side effects. The schema is derived state and is never
//! stored; it is recomputed in full on every committed change.
//!
//! ## Shape
//!
//! The root is a fixed `body` constraint with one child per element, in
//! sequence order. Group numbering follows the element's 1-based position in
//! the current sequence, not its creation order.

use blockdoc_document::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute name used for the first child's group marker
const RELATED_ID_ATTR: &str = "data-related-id";

/// Attribute name used for every child after the first
const ID_ATTR: &str = "id";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to render schema as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// Content constraint of a schema node
///
/// Serializes to `null` when absent and to a one-element string array when a
/// literal is required, matching the displayed schema format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum ContentConstraint {
    Absent,
    Literal(String),
}

impl From<ContentConstraint> for Option<Vec<String>> {
    fn from(constraint: ContentConstraint) -> Self {
        match constraint {
            ContentConstraint::Absent => None,
            ContentConstraint::Literal(text) => Some(vec![text]),
        }
    }
}

impl From<Option<Vec<String>>> for ContentConstraint {
    fn from(value: Option<Vec<String>>) -> Self {
        match value.and_then(|mut texts| {
            if texts.is_empty() {
                None
            } else {
                Some(texts.remove(0))
            }
        }) {
            Some(text) => ContentConstraint::Literal(text),
            None => ContentConstraint::Absent,
        }
    }
}

/// Single required attribute of a schema node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConstraint {
    pub name: String,
    pub value: String,
}

impl AttributeConstraint {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Schema constraint for one document element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub tag: String,
    pub content: ContentConstraint,
    pub attribute: AttributeConstraint,
}

/// Root schema document: a `body` wrapper around one node per element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub tag: String,
    pub content: ContentConstraint,
    pub children: Vec<SchemaNode>,
}

impl SchemaDocument {
    /// Render for the read-only preview region
    pub fn to_pretty_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Project an element sequence to its schema document
///
/// One child per element, order preserved. The first child carries a
/// `data-related-id` attribute; all others carry `id`. Both use the element's
/// 1-based position as the group suffix. Empty content maps to
/// [`ContentConstraint::Absent`].
pub fn project(elements: &[Element]) -> SchemaDocument {
    SchemaDocument {
        tag: "body".to_string(),
        content: ContentConstraint::Absent,
        children: elements
            .iter()
            .enumerate()
            .map(|(index, element)| project_element(index, element))
            .collect(),
    }
}

fn project_element(index: usize, element: &Element) -> SchemaNode {
    let group = format!("group{}", index + 1);

    // The first element marks the group it relates to; the rest are
    // addressable members. Positional rule, not a kind distinction.
    let attribute = if index == 0 {
        AttributeConstraint::new(RELATED_ID_ATTR, group)
    } else {
        AttributeConstraint::new(ID_ATTR, group)
    };

    let content = if element.content.is_empty() {
        ContentConstraint::Absent
    } else {
        ContentConstraint::Literal(element.content.clone())
    };

    SchemaNode {
        tag: element.kind.tag_name().to_string(),
        content,
        attribute,
    }
}
