//! Schema-independent stream engine.
//!
//! The buffering and classification pipeline is identical for every record
//! vocabulary; only the record set and the state it builds differ. The
//! engine owns the line reassembly and drives a [`Vocabulary`]
//! implementation, so building a new document shape out of a record stream
//! needs only a record type, a state type, and an `apply` function. The
//! draft schema in [`crate::accumulator`] is one such implementation.

use crate::buffer::LineBuffer;

/// A record vocabulary together with the state it accumulates.
///
/// `classify` and `apply` mirror the two decisions made per line: is this a
/// record, and what does it do to the document. Both must tolerate any
/// input: a line that is not a record and a record that cannot be applied
/// are ordinary, silent outcomes.
pub trait Vocabulary {
    /// Decoded record type, one per recognized line.
    type Record;

    /// Accumulated document state.
    type State;

    /// Update emitted for each applied mutation.
    type Update;

    /// Decodes one line, or `None` when the line is not a record.
    fn classify(line: &str) -> Option<Self::Record>;

    /// Applies one record to the state, reporting the mutation if any.
    fn apply(state: &mut Self::State, record: Self::Record) -> Option<Self::Update>;
}

/// Line-oriented stream engine parameterized by a record vocabulary.
///
/// The engine reports updates through a sink closure that also observes the
/// state *as of that update*, which lets callers materialize per-record
/// snapshots instead of only seeing the post-chunk state.
pub struct StreamEngine<V: Vocabulary> {
    buffer: LineBuffer,
    state: V::State,
}

impl<V: Vocabulary> StreamEngine<V> {
    /// Creates an engine around an initial state.
    pub fn new(state: V::State) -> Self {
        Self {
            buffer: LineBuffer::new(),
            state,
        }
    }

    /// Feeds one chunk, invoking `sink` once per applied mutation.
    pub fn feed<F>(&mut self, chunk: &str, mut sink: F)
    where
        F: FnMut(&V::State, V::Update),
    {
        for line in self.buffer.feed(chunk) {
            self.process(&line, &mut sink);
        }
    }

    /// Ends the stream, treating any buffered partial line as final.
    pub fn flush<F>(&mut self, mut sink: F)
    where
        F: FnMut(&V::State, V::Update),
    {
        if let Some(line) = self.buffer.flush() {
            self.process(&line, &mut sink);
        }
    }

    /// Current accumulated state.
    pub fn state(&self) -> &V::State {
        &self.state
    }

    /// Consumes the engine, returning the accumulated state.
    pub fn into_state(self) -> V::State {
        self.state
    }

    /// Discards buffered input and accumulated state.
    pub fn reset(&mut self)
    where
        V::State: Default,
    {
        self.buffer = LineBuffer::new();
        self.state = V::State::default();
    }

    fn process<F>(&mut self, line: &str, sink: &mut F)
    where
        F: FnMut(&V::State, V::Update),
    {
        if let Some(record) = V::classify(line) {
            if let Some(update) = V::apply(&mut self.state, record) {
                sink(&self.state, update);
            }
        }
    }
}
