//! # Blockdoc Editor
//!
//! Editing engine for the document builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Element model + ID generation     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DocumentStore + mutations           │
//! │  - Commands as serializable Mutations       │
//! │  - Pure application, commit-on-change       │
//! │  - Observer notification per commit         │
//! │  - Inline formatting of the focused element │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ schema: element sequence → schema document  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The element sequence is source of truth**: the schema is a derived
//!    view, re-projected on every committed change
//! 2. **Mutations are pure**: application returns a new sequence, so no-ops
//!    are detected by plain equality and commit nothing
//! 3. **Invalid targets are no-ops**: unknown IDs and cancelled moves are
//!    silently ignored, matching how a UI issues commands
//!
//! ## Usage
//!
//! ```rust
//! use blockdoc_editor::{DocumentStore, ElementKind, InlineTag};
//!
//! let mut store = DocumentStore::new("untitled");
//! store.subscribe(|event| {
//!     println!("v{}: {} elements", event.version, event.elements.len());
//! });
//!
//! let id = store.add(ElementKind::Paragraph);
//! store.update(&id, "hello world");
//!
//! store.set_active(&id);
//! let caret = store.format_active(6, 11, InlineTag::Strong);
//! assert!(caret.is_some());
//!
//! let json = store.schema().to_pretty_json().unwrap();
//! assert!(json.contains("\"p\""));
//! ```

mod formatting;
mod mutations;
mod store;

pub use formatting::{caret_after_wrap, wrap_selection, InlineTag};
pub use mutations::Mutation;
pub use store::{ChangeEvent, DocumentStore, SubscriptionId};

// Re-export common types for convenience
pub use blockdoc_document::{Element, ElementKind};
pub use blockdoc_schema::{project, ContentConstraint, SchemaDocument};
