//! Console chat adapter - Implements ChatPort by writing JSON lines
//!
//! Each outgoing message is rendered with [`SlackMessageRenderer`] and
//! written as one line of JSON, so the output can be piped into tooling or
//! compared against a transcript.

use std::{
    io::{self, Write},
    sync::atomic::{AtomicU64, Ordering},
};

use application::{
    error::ApplicationError,
    ports::{ChatPort, OutgoingChatMessage},
};
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use super::SlackMessageRenderer;

/// Chat sink writing one rendered message per line
pub struct ConsoleChatAdapter<W> {
    writer: Mutex<W>,
    renderer: SlackMessageRenderer,
    sequence: AtomicU64,
}

impl<W> std::fmt::Debug for ConsoleChatAdapter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleChatAdapter")
            .field("sent", &self.sequence.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl ConsoleChatAdapter<io::Stdout> {
    /// Write to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleChatAdapter<W> {
    /// Write to the given sink
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            renderer: SlackMessageRenderer::new(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Number of messages written so far
    pub fn sent_count(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }

    /// Consume the adapter and return the sink
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> ChatPort for ConsoleChatAdapter<W> {
    #[instrument(skip(self, message), fields(channel = %message.channel))]
    async fn send(&self, message: OutgoingChatMessage) -> Result<String, ApplicationError> {
        let body = self.renderer.render(&message);
        let line = serde_json::to_string(&body)
            .map_err(|e| ApplicationError::Internal(format!("Failed to encode message: {e}")))?;

        {
            let mut writer = self.writer.lock();
            writeln!(writer, "{line}")
                .and_then(|()| writer.flush())
                .map_err(|e| ApplicationError::Messenger(format!("Failed to write message: {e}")))?;
        }

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let message_id = format!("{seq}.000000");
        debug!(message_id = %message_id, "Message written");
        Ok(message_id)
    }
}
