//! Draft accumulation state machine.
//!
//! The accumulator owns the evolving [`Draft`] and applies classified
//! records to it one at a time, as a reducer: each [`apply`](Accumulator::apply)
//! call mutates the tree and reports the mutation as a [`DraftEvent`].
//! Records that cannot be applied (dangling parent references, duplicate
//! ids, anything after the terminal record) are dropped and counted, never
//! raised as errors; the producer is not trusted to emit a clean stream.
//!
//! # State machine
//!
//! ```text
//! Building ──(complete record)──▶ Complete
//! ```
//!
//! No transition leaves `Complete`; every later record is a no-op.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use log::debug;

use crate::engine::Vocabulary;
use crate::models::{Container, Draft, DraftEvent, Item, SubItem};
use crate::record::{self, Record};

/// Process-wide sequence so concurrent builds never share a draft identity.
static DRAFT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Build phase of an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Building,
    Complete,
}

/// Owns the evolving draft and applies classified records to it.
pub struct Accumulator {
    draft: Draft,
    phase: Phase,
    /// container id → position in `draft.containers`
    container_index: HashMap<String, usize>,
    /// item id → (container position, item position)
    item_index: HashMap<String, (usize, usize)>,
    /// Records dropped so far; diagnostic only, never surfaced as an error
    dropped: u64,
    /// Sequence for generated sub-item ids, unique within this build
    sub_item_seq: u64,
}

impl Accumulator {
    /// Creates an accumulator around a fresh, empty draft.
    pub fn new() -> Self {
        let seq = DRAFT_SEQ.fetch_add(1, Ordering::Relaxed);
        let id = format!("draft-{}-{seq}", Timestamp::now().as_millisecond());

        Self {
            draft: Draft::new(id),
            phase: Phase::Building,
            container_index: HashMap::new(),
            item_index: HashMap::new(),
            dropped: 0,
            sub_item_seq: 0,
        }
    }

    /// Applies one record, returning the resulting event if the tree changed.
    pub fn apply(&mut self, record: Record) -> Option<DraftEvent> {
        if self.phase == Phase::Complete {
            self.drop_record("record arrived after completion");
            return None;
        }

        match record {
            Record::RootInit { name, description } => {
                self.draft.name = name.clone();
                self.draft.description = description.clone();
                Some(DraftEvent::DraftInitialized { name, description })
            }

            Record::Container {
                id,
                name,
                description,
            } => {
                if self.container_index.contains_key(&id) {
                    self.drop_record(&format!("duplicate container {id}"));
                    return None;
                }

                let container = Container {
                    id: id.clone(),
                    name,
                    description,
                    items: Vec::new(),
                };
                self.container_index.insert(id, self.draft.containers.len());
                self.draft.containers.push(container.clone());
                self.draft.summary.container_count += 1;
                Some(DraftEvent::ContainerAdded { container })
            }

            Record::Item {
                id,
                container_id,
                name,
                description,
                priority,
                estimated_minutes,
            } => {
                let Some(&container_pos) = self.container_index.get(&container_id) else {
                    self.drop_record(&format!("item {id} references unknown container {container_id}"));
                    return None;
                };
                if self.item_index.contains_key(&id) {
                    self.drop_record(&format!("duplicate item {id}"));
                    return None;
                }

                let item = Item {
                    id: id.clone(),
                    name,
                    description,
                    priority,
                    estimated_minutes,
                    sub_items: Vec::new(),
                };
                let container = &mut self.draft.containers[container_pos];
                self.item_index.insert(id, (container_pos, container.items.len()));
                container.items.push(item.clone());
                self.draft.summary.item_count += 1;
                Some(DraftEvent::ItemAdded { container_id, item })
            }

            Record::SubItem {
                id,
                item_id,
                name,
                description,
                estimated_minutes,
            } => {
                let Some(&(container_pos, item_pos)) = self.item_index.get(&item_id) else {
                    self.drop_record(&format!("sub-item references unknown item {item_id}"));
                    return None;
                };

                let sub_item = SubItem {
                    id: id.unwrap_or_else(|| self.generate_sub_item_id()),
                    name,
                    description,
                    estimated_minutes,
                };
                self.draft.containers[container_pos].items[item_pos]
                    .sub_items
                    .push(sub_item.clone());
                self.draft.summary.sub_item_count += 1;
                Some(DraftEvent::SubItemAdded { item_id, sub_item })
            }

            Record::Complete { message } => {
                self.phase = Phase::Complete;
                self.draft.is_building = false;
                if let Some(message) = message {
                    self.draft.message = message;
                }
                Some(DraftEvent::DraftCompleted {
                    message: self.draft.message.clone(),
                })
            }
        }
    }

    /// Current draft value.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Consumes the accumulator, returning the draft.
    pub fn into_draft(self) -> Draft {
        self.draft
    }

    /// True once the terminal record has been applied.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Number of records dropped so far (dangling references, duplicates,
    /// post-completion records).
    pub fn dropped_records(&self) -> u64 {
        self.dropped
    }

    fn drop_record(&mut self, reason: &str) {
        debug!("dropping record: {reason}");
        self.dropped += 1;
    }

    /// Generates an id for a sub-item record that supplied none.
    ///
    /// Build-epoch milliseconds plus a per-build counter; unique within one
    /// build.
    fn generate_sub_item_id(&mut self) -> String {
        self.sub_item_seq += 1;
        format!(
            "sub-{}-{}",
            self.draft.created_at.as_millisecond(),
            self.sub_item_seq
        )
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Marker wiring the draft schema into the generic stream engine.
#[derive(Debug)]
pub struct DraftVocabulary;

impl Vocabulary for DraftVocabulary {
    type Record = Record;
    type State = Accumulator;
    type Update = DraftEvent;

    fn classify(line: &str) -> Option<Record> {
        record::classify(line)
    }

    fn apply(state: &mut Accumulator, record: Record) -> Option<DraftEvent> {
        state.apply(record)
    }
}
