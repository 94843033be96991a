//! UseCase: a user sends a chat line.
//!
//! `to: "all"` goes to every registered session, the sender included.
//! Anything else is a private message to that one user; if nobody is
//! registered under that id the message is dropped without telling the
//! sender.

use std::sync::Arc;

use crate::domain::{ChatEvent, InboundMessage, Recipient, SessionRegistry, UserId};

use super::fan_out::{FanOutReport, fan_out};

pub struct RouteMessageUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl RouteMessageUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, from: UserId, message: InboundMessage) -> FanOutReport {
        match message.to {
            Recipient::All => {
                let sessions = self.registry.snapshot().await;
                tracing::info!(
                    "Broadcasting message from '{}' to {} sessions",
                    from,
                    sessions.len()
                );
                let event = ChatEvent::broadcast(&from, &message.text);
                fan_out(&sessions, |_| event.clone()).await
            }
            Recipient::User(to) => match self.registry.lookup(&to).await {
                Some(session) => {
                    tracing::info!("Private message from '{}' to '{}'", from, to);
                    fan_out(&[session], |_| ChatEvent::private(&from, &message.text)).await
                }
                None => {
                    tracing::debug!(
                        "Private message from '{}' to unknown user '{}' dropped",
                        from,
                        to
                    );
                    FanOutReport::default()
                }
            },
            Recipient::Unknown(to) => {
                tracing::debug!(
                    "Private message from '{}' to invalid address '{}' dropped",
                    from,
                    to
                );
                FanOutReport::default()
            }
        }
    }
}
