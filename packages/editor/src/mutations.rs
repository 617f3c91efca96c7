//! # Sequence Mutations
//!
//! Semantic operations on the element sequence.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user action
//! 2. **Pure**: Application returns a new sequence, the input is untouched
//! 3. **Forgiving**: Invalid targets are no-ops, never panics or errors
//!
//! ## Mutation Semantics
//!
//! ### UpdateContent
//! - Atomic replacement of the matching element's content
//! - Unknown ID is a no-op
//!
//! ### RemoveElement
//! - Deletes the matching element, closing the gap
//! - Unknown ID is a no-op
//!
//! ### MoveElement
//! - Removes at `source_index`, reinserts at `destination`
//! - `destination: None` (cancelled drag) is a no-op
//! - Out-of-range source is a no-op; destination clamps to the sequence end

use blockdoc_document::Element;
use serde::{Deserialize, Serialize};

/// One user-intent operation on the element sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new element to the end of the sequence
    InsertElement { element: Element },

    /// Replace the content of the element matching `element_id`
    UpdateContent { element_id: String, content: String },

    /// Remove the element matching `element_id`
    RemoveElement { element_id: String },

    /// Relocate the element at `source_index` to `destination`
    MoveElement {
        source_index: usize,
        destination: Option<usize>,
    },
}

impl Mutation {
    /// Apply to a sequence, producing the resulting sequence
    ///
    /// Never mutates `elements`; a no-op returns an equal sequence, which is
    /// how callers detect that nothing changed.
    pub fn apply(&self, elements: &[Element]) -> Vec<Element> {
        match self {
            Mutation::InsertElement { element } => {
                let mut next = elements.to_vec();
                next.push(element.clone());
                next
            }

            Mutation::UpdateContent {
                element_id,
                content,
            } => elements
                .iter()
                .map(|element| {
                    if element.id == *element_id {
                        let mut updated = element.clone();
                        updated.content = content.clone();
                        updated
                    } else {
                        element.clone()
                    }
                })
                .collect(),

            Mutation::RemoveElement { element_id } => elements
                .iter()
                .filter(|element| element.id != *element_id)
                .cloned()
                .collect(),

            Mutation::MoveElement {
                source_index,
                destination,
            } => {
                let Some(destination) = destination else {
                    return elements.to_vec();
                };
                if *source_index >= elements.len() {
                    return elements.to_vec();
                }

                let mut next = elements.to_vec();
                let moved = next.remove(*source_index);
                let insert_index = (*destination).min(next.len());
                next.insert(insert_index, moved);
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdoc_document::ElementKind;

    fn sequence(ids: &[&str]) -> Vec<Element> {
        ids.iter()
            .map(|id| Element::new(*id, ElementKind::Paragraph))
            .collect()
    }

    #[test]
    fn test_insert_appends() {
        let before = sequence(&["a"]);
        let after = Mutation::InsertElement {
            element: Element::new("b", ElementKind::OrderedList),
        }
        .apply(&before);

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after[1].id, "b");
    }

    #[test]
    fn test_update_replaces_content_only() {
        let before = sequence(&["a", "b"]);
        let after = Mutation::UpdateContent {
            element_id: "b".to_string(),
            content: "Hello".to_string(),
        }
        .apply(&before);

        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].id, "b");
        assert_eq!(after[1].content, "Hello");
        assert!(before[1].content.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let before = sequence(&["a"]);
        let after = Mutation::UpdateContent {
            element_id: "missing".to_string(),
            content: "x".to_string(),
        }
        .apply(&before);

        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_closes_gap() {
        let before = sequence(&["a", "b", "c"]);
        let after = Mutation::RemoveElement {
            element_id: "b".to_string(),
        }
        .apply(&before);

        let ids: Vec<&str> = after.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let before = sequence(&["a", "b"]);
        let after = Mutation::RemoveElement {
            element_id: "z".to_string(),
        }
        .apply(&before);

        assert_eq!(before, after);
    }

    #[test]
    fn test_move_relocates() {
        let before = sequence(&["a", "b", "c"]);
        let after = Mutation::MoveElement {
            source_index: 0,
            destination: Some(2),
        }
        .apply(&before);

        let ids: Vec<&str> = after.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_there_and_back_restores_order() {
        let original = sequence(&["a", "b", "c", "d"]);

        for source in 0..original.len() {
            for dest in 0..original.len() {
                if source == dest {
                    continue;
                }
                let moved = Mutation::MoveElement {
                    source_index: source,
                    destination: Some(dest),
                }
                .apply(&original);
                let restored = Mutation::MoveElement {
                    source_index: dest,
                    destination: Some(source),
                }
                .apply(&moved);

                assert_eq!(restored, original, "move {source}->{dest} did not undo");
            }
        }
    }

    #[test]
    fn test_move_without_destination_is_noop() {
        let before = sequence(&["a", "b"]);
        let after = Mutation::MoveElement {
            source_index: 0,
            destination: None,
        }
        .apply(&before);

        assert_eq!(before, after);
    }

    #[test]
    fn test_move_out_of_range_source_is_noop() {
        let before = sequence(&["a", "b"]);
        let after = Mutation::MoveElement {
            source_index: 5,
            destination: Some(0),
        }
        .apply(&before);

        assert_eq!(before, after);
    }

    #[test]
    fn test_move_destination_clamps_to_end() {
        let before = sequence(&["a", "b", "c"]);
        let after = Mutation::MoveElement {
            source_index: 0,
            destination: Some(99),
        }
        .apply(&before);

        let ids: Vec<&str> = after.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateContent {
            element_id: "el-123".to_string(),
            content: "Hello World".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }
}
