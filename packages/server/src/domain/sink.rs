//! Outbound side of a session.

use std::sync::Arc;

use async_trait::async_trait;

use super::{error::SendError, event::ChatEvent};

/// Sink that delivers events to one connected client, in order.
///
/// `send` must complete (or fail) within a bounded time so that a stalled
/// client cannot hold up a fan-out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutboundSink: Send + Sync {
    async fn send(&self, event: ChatEvent) -> Result<(), SendError>;
}

/// Shared handle to a session's sink
pub type SessionHandle = Arc<dyn OutboundSink>;
