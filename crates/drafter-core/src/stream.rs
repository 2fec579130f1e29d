//! Async transport adapter for channel-delivered chunk streams.
//!
//! The transport that produces stream output (an HTTP streaming response,
//! typically) delivers one chunk per network read. This adapter bridges such
//! a transport to a [`Drafter`] over tokio channels: the producer sends each
//! chunk as it arrives and closes the sender at end-of-stream, which the
//! adapter surfaces as `flush`. All parse-level noise stays silent; the only
//! error is the consumer hanging up while the stream is still producing.

use tokio::sync::mpsc;

use crate::drafter::{DraftUpdate, DrafterBuilder, UpdateStyle};
use crate::error::{DrafterError, Result};
use crate::models::Draft;

/// Consumes a chunk channel to exhaustion, forwarding updates.
///
/// Chunks are fed in arrival order; closing the chunk sender ends the
/// stream. Returns the final draft.
///
/// # Errors
///
/// Returns [`DrafterError::UpdateChannelClosed`] when the update receiver
/// is dropped before the stream ends.
pub async fn drive_stream(
    mut chunks: mpsc::Receiver<String>,
    updates: mpsc::Sender<DraftUpdate>,
    style: UpdateStyle,
) -> Result<Draft> {
    let mut drafter = DrafterBuilder::new().with_update_style(style).build();

    while let Some(chunk) = chunks.recv().await {
        forward(&updates, drafter.feed(&chunk)).await?;
    }
    forward(&updates, drafter.flush()).await?;

    Ok(drafter.into_draft())
}

async fn forward(updates: &mpsc::Sender<DraftUpdate>, batch: Vec<DraftUpdate>) -> Result<()> {
    for update in batch {
        updates
            .send(update)
            .await
            .map_err(|_| DrafterError::UpdateChannelClosed)?;
    }
    Ok(())
}
