//! Line reassembly for arbitrarily-chunked text streams.
//!
//! The transport delivers stream output in fragments whose boundaries carry
//! no meaning: one fragment may hold several complete lines, or a single line
//! may arrive one character at a time. [`LineBuffer`] reassembles those
//! fragments into complete lines so the rest of the pipeline only ever sees
//! whole lines, in strict arrival order.

/// Reassembles arbitrarily-split text chunks into complete lines.
///
/// The segment after the last newline stays buffered until a later chunk
/// completes it or [`flush`](LineBuffer::flush) ends the stream. No line is
/// ever skipped or duplicated across `feed` calls, and no input is ever
/// rejected.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: String,
}

impl LineBuffer {
    /// Creates an empty line buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns every line it completed, in order.
    ///
    /// Empty chunks are legal and complete nothing.
    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        self.buffer.push_str(chunk);
        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Vec::new();
        };

        // Everything up to (and including) the last newline is complete; the
        // remainder becomes the new buffer.
        let tail = self.buffer.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.buffer, tail);
        complete.lines().map(str::to_string).collect()
    }

    /// Ends the stream, returning any buffered partial line.
    ///
    /// The remaining buffer contents are treated as one final line if they
    /// are non-empty after trimming whitespace. The buffer is cleared either
    /// way.
    pub fn flush(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        let trimmed = rest.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// True when no partial line is buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk_multiple_lines() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.feed("one\ntwo\nthree\n");
        assert_eq!(lines, vec!["one", "two", "three"]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_partial_line_retained() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.feed("one\ntwo\npart");
        assert_eq!(lines, vec!["one", "two"]);
        assert!(!buffer.is_empty());

        let lines = buffer.feed("ial\n");
        assert_eq!(lines, vec!["partial"]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_one_character_at_a_time() {
        let mut buffer = LineBuffer::new();
        let mut lines = Vec::new();
        for ch in "ab\ncd\n".chars() {
            lines.extend(buffer.feed(&ch.to_string()));
        }
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn test_empty_chunks_are_legal() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.feed("").is_empty());
        assert_eq!(buffer.feed("line\n"), vec!["line"]);
        assert!(buffer.feed("").is_empty());
    }

    #[test]
    fn test_interior_empty_lines_are_preserved() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.feed("one\n\ntwo\n");
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_flush_returns_trimmed_remainder() {
        let mut buffer = LineBuffer::new();
        buffer.feed("no newline yet");
        assert_eq!(buffer.flush(), Some("no newline yet".to_string()));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_flush_of_whitespace_is_none() {
        let mut buffer = LineBuffer::new();
        buffer.feed("   \t ");
        assert_eq!(buffer.flush(), None);

        let mut buffer = LineBuffer::new();
        assert_eq!(buffer.flush(), None);
    }

    #[test]
    fn test_chunk_boundary_inside_line() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.feed("{\"type\":").is_empty());
        assert!(buffer.feed("\"container\"}").is_empty());
        let lines = buffer.feed("\n");
        assert_eq!(lines, vec!["{\"type\":\"container\"}"]);
    }
}
