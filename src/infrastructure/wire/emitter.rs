use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::domain::model::message::OutboundMessage;

/// Faults raised while writing a response line. These are the only faults
/// that abort the process; everything on the inbound side degrades to
/// defaults instead.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("Failed to serialize outbound message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write to response channel: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes outbound messages to an owned response channel, one JSON line per
/// message.
///
/// The writer is passed in rather than grabbed from the process environment,
/// so tests can point the emitter at an in-memory buffer. Every emit flushes
/// before returning; a pipe reader must see each message as soon as it is
/// produced.
pub struct ResponseEmitter<W> {
    pub writer: W,
}

impl<W: AsyncWrite + Unpin> ResponseEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize one message, write it with a trailing newline, and flush.
    pub async fn emit(&mut self, message: &OutboundMessage) -> Result<(), WireError> {
        let mut line = serde_json::to_vec(message)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
