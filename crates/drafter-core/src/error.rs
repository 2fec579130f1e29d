//! Error types for the drafter library.
//!
//! The parse pipeline itself is infallible by design: malformed lines,
//! unknown record kinds, and dangling references are silently dropped, never
//! raised (see [`crate::accumulator`]). Errors exist only at the transport
//! boundary, where a real failure (the consumer hanging up mid-stream) has
//! to be reported.

use thiserror::Error;

/// Errors surfaced by the stream boundary adapters.
#[derive(Error, Debug)]
pub enum DrafterError {
    /// The update receiver was dropped while the stream was still producing
    #[error("update channel closed by the consumer")]
    UpdateChannelClosed,
}

/// Result type alias for drafter operations
pub type Result<T> = std::result::Result<T, DrafterError>;
