//! # Blockdoc Document Model
//!
//! Value types for the document builder core.
//!
//! A document is an ordered sequence of [`Element`]s. Each element carries an
//! opaque immutable `id`, a tag kind (`p`, `ol`, `ul`), and its text content.
//! Order in the sequence is the only relationship between elements.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Element model + ID generation     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DocumentStore + mutations           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ schema: element sequence → schema document  │
//! └─────────────────────────────────────────────┘
//! ```

mod element;
mod id_generator;

pub use element::{Element, ElementKind};
pub use id_generator::{get_document_id, ElementIdGenerator};
