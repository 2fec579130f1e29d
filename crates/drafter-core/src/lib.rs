//! Core library for the Drafter incremental document builder.
//!
//! Drafter consumes the text stream of a language model as it arrives,
//! recognizes structured records embedded one-per-line in the stream, and
//! progressively assembles a typed hierarchical draft (containers holding
//! items holding sub-items), emitting an update per applied record so a UI
//! can render partial results before the stream finishes.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ LineBuffer  │    │  classify   │    │ Accumulator │
//! │ (chunks →   │───▶│ (line →     │───▶│ (record →   │───▶ updates
//! │  lines)     │    │  record)    │    │  mutation)  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
//!
//! [`Drafter`] wires the three stages together behind a `feed`/`flush`/
//! `reset` API. Free-form "thinking" text interleaved with records is
//! expected and silently skipped; the pipeline never fails on any input.
//! The stages themselves are generic: [`StreamEngine`] drives any
//! [`Vocabulary`], and the draft schema is one implementation of it.
//!
//! # Quick Start
//!
//! ```rust
//! use drafter_core::{DrafterBuilder, UpdateStyle};
//!
//! let mut drafter = DrafterBuilder::new()
//!     .with_update_style(UpdateStyle::Delta)
//!     .build();
//!
//! // Chunks may split lines anywhere; updates appear as records complete.
//! let mut updates = Vec::new();
//! updates.extend(drafter.feed("{\"type\":\"root-init\",\"na"));
//! updates.extend(drafter.feed("me\":\"Launch Plan\"}\n"));
//! updates.extend(drafter.flush());
//!
//! assert_eq!(updates.len(), 1);
//! assert_eq!(drafter.draft().name, "Launch Plan");
//! ```

pub mod accumulator;
pub mod buffer;
pub mod display;
pub mod drafter;
pub mod engine;
pub mod error;
pub mod models;
pub mod record;
pub mod stream;

// Re-export commonly used types
pub use accumulator::{Accumulator, DraftVocabulary};
pub use buffer::LineBuffer;
pub use drafter::{DraftUpdate, Drafter, DrafterBuilder, UpdateStyle};
pub use engine::{StreamEngine, Vocabulary};
pub use error::{DrafterError, Result};
pub use models::{Container, Draft, DraftEvent, DraftSummary, Item, Priority, SubItem};
pub use record::{classify, Record};
pub use stream::drive_stream;
