//! Data models for drafts and their update events.
//!
//! This module contains the core domain models that represent the evolving
//! draft tree. Display implementations for these models are located in
//! [`crate::display`] to maintain clean separation of concerns between data
//! structures and presentation logic.
//!
//! All models serialize with camelCase field names: the consumer of
//! snapshots and events is typically a rendering layer across an IPC or
//! network boundary (e.g., a browser UI), and the wire schema matches the
//! record stream itself. With the `schema` feature enabled, every
//! serializable surface type also derives a JSON schema for cross-boundary
//! consumers.

pub mod container;
pub mod draft;
pub mod event;
pub mod item;
pub mod priority;
pub mod summary;


// Re-export all public types at the models level
pub use container::Container;
pub use draft::Draft;
pub use event::DraftEvent;
pub use item::{Item, SubItem};
pub use priority::Priority;
pub use summary::DraftSummary;
