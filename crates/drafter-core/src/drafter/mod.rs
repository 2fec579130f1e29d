//! High-level stream coordinator for draft building.
//!
//! [`Drafter`] is the surface most callers use: it wires the line buffer,
//! the record classifier, and the accumulator together behind a
//! `feed`/`flush`/`reset` API and adapts the accumulator's events into the
//! update style the caller chose at construction.
//!
//! ```text
//! raw chunks ──▶ LineBuffer ──▶ classify ──▶ Accumulator ──▶ DraftUpdate
//! ```
//!
//! The coordinator carries no document state of its own; everything lives in
//! the engine it delegates to. Each stream needs its own instance; there is
//! no shared mutable state between instances, so independent streams (one
//! per open conversation, say) never interfere.

pub mod builder;


pub use builder::DrafterBuilder;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::accumulator::{Accumulator, DraftVocabulary};
use crate::engine::StreamEngine;
use crate::models::{Draft, DraftEvent};

/// How updates are delivered to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateStyle {
    /// Deliver the full draft value after every mutation. Simplest for
    /// consumers that re-render in full.
    Snapshot,

    /// Deliver only the event describing one mutation, for consumers that
    /// apply minimal patches.
    #[default]
    Delta,
}

/// One update delivered to the caller, in the configured style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DraftUpdate {
    /// Complete draft as of one applied mutation.
    Snapshot(Draft),

    /// Discrete mutation event.
    Event(DraftEvent),
}

/// Stream coordinator: feeds chunks through the engine and adapts updates.
///
/// Strictly sequential, single producer: chunks must be fed in the order
/// the transport delivers them. `feed` never blocks and performs no I/O.
/// Abandoning a drafter mid-stream is always safe; any buffered partial
/// line is discarded with the instance.
pub struct Drafter {
    engine: StreamEngine<DraftVocabulary>,
    style: UpdateStyle,
    flushed: bool,
}

impl Drafter {
    pub(crate) fn new(style: UpdateStyle) -> Self {
        Self {
            engine: StreamEngine::new(Accumulator::new()),
            style,
            flushed: false,
        }
    }

    /// Feeds one chunk of stream output.
    ///
    /// Returns one update per record the chunk completed and applied. Each
    /// snapshot reflects the tree as of its own record, not the post-chunk
    /// state. Feeding after [`flush`](Self::flush) is a caller error and is
    /// ignored.
    pub fn feed(&mut self, chunk: &str) -> Vec<DraftUpdate> {
        if self.flushed {
            debug!("feed after flush ignored ({} bytes)", chunk.len());
            return Vec::new();
        }

        let style = self.style;
        let mut updates = Vec::new();
        self.engine.feed(chunk, |state, event| {
            updates.push(Self::adapt(style, state, event));
        });
        updates
    }

    /// Signals end-of-stream, treating any buffered partial line as final.
    ///
    /// Idempotent; repeated calls return nothing.
    pub fn flush(&mut self) -> Vec<DraftUpdate> {
        if self.flushed {
            return Vec::new();
        }
        self.flushed = true;

        let style = self.style;
        let mut updates = Vec::new();
        self.engine.flush(|state, event| {
            updates.push(Self::adapt(style, state, event));
        });
        updates
    }

    /// Discards all state and starts a fresh build under a new identity.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.flushed = false;
    }

    /// Current draft value.
    pub fn draft(&self) -> &Draft {
        self.engine.state().draft()
    }

    /// Consumes the coordinator, returning the final draft.
    pub fn into_draft(self) -> Draft {
        self.engine.into_state().into_draft()
    }

    /// Number of records dropped so far (dangling references, duplicates,
    /// post-completion records).
    pub fn dropped_records(&self) -> u64 {
        self.engine.state().dropped_records()
    }

    fn adapt(style: UpdateStyle, state: &Accumulator, event: DraftEvent) -> DraftUpdate {
        match style {
            UpdateStyle::Snapshot => DraftUpdate::Snapshot(state.draft().clone()),
            UpdateStyle::Delta => DraftUpdate::Event(event),
        }
    }
}
