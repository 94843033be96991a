//! UseCase: a user disconnects.
//!
//! Removes the session and sends a `close` presence event to every session
//! that remains, each with its own roster. A transport that knows which
//! session ended uses `execute_session`, which leaves a newer session under
//! the same id in place and announces nothing.

use std::sync::Arc;

use crate::domain::{ChatEvent, SessionId, SessionRegistry, UserId};

use super::fan_out::{FanOutReport, fan_out, roster_excluding};

pub struct DisconnectUserUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl DisconnectUserUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Unregister `user_id` and notify the remaining sessions.
    ///
    /// An id that is not registered is not an error; the remaining sessions
    /// are still told the user left.
    pub async fn execute(&self, user_id: UserId) -> FanOutReport {
        if self.registry.unregister(&user_id).await.is_none() {
            tracing::debug!("'{}' disconnected without a registered session", user_id);
        }
        self.announce_left(&user_id).await
    }

    /// Unregister `session_id` if it is still the session of `user_id`, then
    /// notify the remaining sessions.
    ///
    /// Returns `None` when the session was already replaced or removed.
    pub async fn execute_session(
        &self,
        user_id: UserId,
        session_id: SessionId,
    ) -> Option<FanOutReport> {
        self.registry.unregister_session(&user_id, session_id).await?;
        Some(self.announce_left(&user_id).await)
    }

    async fn announce_left(&self, user_id: &UserId) -> FanOutReport {
        let sessions = self.registry.snapshot().await;
        tracing::info!("'{}' left; {} online", user_id, sessions.len());

        fan_out(&sessions, |recipient| {
            ChatEvent::left(user_id, roster_excluding(&sessions, &recipient.user_id))
        })
        .await
    }
}
