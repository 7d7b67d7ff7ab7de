//! Chat port - Interface for the chat transport
//!
//! Inbound events are delivered to the dispatcher as [`IncomingChatMessage`];
//! replies leave through [`ChatPort::send`].

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::ReportPayload;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An inbound chat event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingChatMessage {
    /// Channel the message was posted in
    pub channel: String,
    /// Platform timestamp / message ID
    pub ts: String,
    /// Posting user, absent for some system events
    #[serde(default)]
    pub user: Option<String>,
    /// Message text, absent for attachments-only events
    #[serde(default)]
    pub text: Option<String>,
    /// Event subtype (e.g., "bot_message", "message_changed")
    #[serde(default)]
    pub subtype: Option<String>,
}

impl IncomingChatMessage {
    /// Create a plain user message
    pub fn new(
        channel: impl Into<String>,
        ts: impl Into<String>,
        user: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
            user: Some(user.into()),
            text: Some(text.into()),
            subtype: None,
        }
    }
}

/// An outbound chat message carrying a report payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingChatMessage {
    /// Target channel
    pub channel: String,
    /// Thread to reply in; `None` posts at channel top level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    /// Report to deliver
    pub payload: ReportPayload,
}

impl OutgoingChatMessage {
    /// Create a top-level message in a channel
    pub fn new(channel: impl Into<String>, payload: ReportPayload) -> Self {
        Self {
            channel: channel.into(),
            thread_ts: None,
            payload,
        }
    }

    /// Create a threaded reply to an incoming message
    #[must_use]
    pub fn reply_in_thread(incoming: &IncomingChatMessage, payload: ReportPayload) -> Self {
        Self {
            channel: incoming.channel.clone(),
            thread_ts: Some(incoming.ts.clone()),
            payload,
        }
    }
}

/// Port for sending chat messages
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Send a message
    ///
    /// Returns the platform's ID for the posted message.
    async fn send(&self, message: OutgoingChatMessage) -> Result<String, ApplicationError>;
}
