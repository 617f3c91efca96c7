//! # Document Store
//!
//! Single source of truth for the assembled document.
//!
//! The store owns the element sequence, a version counter, and the cached
//! schema projection. User actions arrive as [`Mutation`]s; each committed
//! mutation bumps the version, re-projects the schema, and notifies
//! registered observers. Mutations whose application leaves the sequence
//! unchanged (unknown IDs, cancelled moves) commit nothing and fire no event.
//!
//! Everything is synchronous: a command runs to completion, including
//! observer callbacks, before it returns.

use blockdoc_document::{Element, ElementIdGenerator, ElementKind};
use blockdoc_schema::{project, SchemaDocument};

use crate::formatting::{caret_after_wrap, wrap_selection, InlineTag};
use crate::mutations::Mutation;

/// Snapshot handed to observers after each committed change
pub struct ChangeEvent<'a> {
    /// Version after the commit
    pub version: u64,

    /// The new element sequence
    pub elements: &'a [Element],

    /// Schema re-projected from the new sequence
    pub schema: &'a SchemaDocument,
}

/// Handle returned by [`DocumentStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type ChangeCallback = Box<dyn FnMut(&ChangeEvent)>;

/// Mutable document model with observer registration
pub struct DocumentStore {
    elements: Vec<Element>,
    version: u64,
    schema: SchemaDocument,
    ids: ElementIdGenerator,

    /// Element currently focused by the host editor, if any
    active_element: Option<String>,

    subscribers: Vec<(SubscriptionId, ChangeCallback)>,
    next_subscription: u64,
}

impl DocumentStore {
    /// Create an empty store for a document named `name`
    ///
    /// The name seeds element ID generation, so two stores with the same
    /// name and command history produce identical sequences.
    pub fn new(name: &str) -> Self {
        Self {
            elements: Vec::new(),
            version: 0,
            schema: project(&[]),
            ids: ElementIdGenerator::new(name),
            active_element: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current element sequence
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Version counter (increments once per committed change)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Schema projected from the current sequence
    pub fn schema(&self) -> &SchemaDocument {
        &self.schema
    }

    /// Register a change observer; called after every committed mutation
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Apply a mutation, committing it only if it changes the sequence
    ///
    /// Returns whether a change was committed.
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        let next = mutation.apply(&self.elements);
        if next == self.elements {
            tracing::trace!(?mutation, "mutation is a no-op, nothing committed");
            return false;
        }

        self.elements = next;
        self.version += 1;
        self.schema = project(&self.elements);

        // A removed element cannot stay focused
        if let Some(active) = &self.active_element {
            if !self.elements.iter().any(|element| element.id == *active) {
                self.active_element = None;
            }
        }

        tracing::debug!(
            version = self.version,
            elements = self.elements.len(),
            "committed mutation"
        );

        self.notify();
        true
    }

    /// Append a new empty element, returning its ID
    pub fn add(&mut self, kind: ElementKind) -> String {
        let id = self.ids.next_id();
        self.apply(Mutation::InsertElement {
            element: Element::new(id.clone(), kind),
        });
        id
    }

    /// Replace the content of the element matching `id` (no-op if absent)
    pub fn update(&mut self, id: &str, content: impl Into<String>) {
        self.apply(Mutation::UpdateContent {
            element_id: id.to_string(),
            content: content.into(),
        });
    }

    /// Remove the element matching `id` (no-op if absent)
    pub fn remove(&mut self, id: &str) {
        self.apply(Mutation::RemoveElement {
            element_id: id.to_string(),
        });
    }

    /// Move the element at `source_index` to `destination`
    ///
    /// `None` means the drag was cancelled and nothing happens.
    pub fn reorder(&mut self, source_index: usize, destination: Option<usize>) {
        self.apply(Mutation::MoveElement {
            source_index,
            destination,
        });
    }

    /// ID of the currently focused element, if any
    pub fn active(&self) -> Option<&str> {
        self.active_element.as_deref()
    }

    /// Focus an element (no-op if the ID is not in the sequence)
    pub fn set_active(&mut self, id: &str) {
        if self.elements.iter().any(|element| element.id == id) {
            self.active_element = Some(id.to_string());
        }
    }

    pub fn clear_active(&mut self) {
        self.active_element = None;
    }

    /// Wrap `start..end` of the active element's content in `tag`
    ///
    /// Commits the updated content and returns the caret offset the host
    /// should restore focus to (just inside the opening tag). Returns `None`
    /// when no element is focused.
    pub fn format_active(&mut self, start: usize, end: usize, tag: InlineTag) -> Option<usize> {
        let active = self.active_element.clone()?;
        let element = self.elements.iter().find(|element| element.id == active)?;

        let content = wrap_selection(&element.content, start, end, tag.name());
        self.apply(Mutation::UpdateContent {
            element_id: active,
            content,
        });

        Some(caret_after_wrap(start, tag.name()))
    }

    fn notify(&mut self) {
        let event = ChangeEvent {
            version: self.version,
            elements: &self.elements,
            schema: &self.schema,
        };

        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }
}
