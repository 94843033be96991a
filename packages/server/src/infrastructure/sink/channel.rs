//! Bounded per-session outbound lane.
//!
//! Each connection owns one `mpsc` channel. The router pushes domain events
//! into it and the connection's writer task drains it onto the socket, so a
//! recipient sees events in the order they were sent to it.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::SendTimeoutError};

use crate::domain::{ChatEvent, OutboundSink, SendError};

pub struct ChannelSink {
    sender: mpsc::Sender<ChatEvent>,
    send_timeout: Duration,
}

impl ChannelSink {
    pub fn new(sender: mpsc::Sender<ChatEvent>, send_timeout: Duration) -> Self {
        Self {
            sender,
            send_timeout,
        }
    }

    /// Create a sink together with the receiving end of its lane.
    ///
    /// `capacity` is clamped to at least 1.
    pub fn channel(capacity: usize, send_timeout: Duration) -> (Self, mpsc::Receiver<ChatEvent>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self::new(sender, send_timeout), receiver)
    }
}

#[async_trait]
impl OutboundSink for ChannelSink {
    async fn send(&self, event: ChatEvent) -> Result<(), SendError> {
        self.sender
            .send_timeout(event, self.send_timeout)
            .await
            .map_err(|e| match e {
                SendTimeoutError::Timeout(_) => SendError::Timeout(self.send_timeout),
                SendTimeoutError::Closed(_) => SendError::Closed,
            })
    }
}
