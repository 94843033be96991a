//! UseCase: a user connects.
//!
//! Registers the session (replacing any previous one under the same id) and
//! sends an `open` presence event to every registered session, the new user
//! included. Each recipient's roster lists everyone online except itself.

use std::sync::Arc;

use chatroom_shared::time::Clock;

use crate::domain::{ChatEvent, Session, SessionHandle, SessionId, SessionRegistry, Timestamp, UserId};

use super::fan_out::{FanOutReport, fan_out, roster_excluding};

/// Result of a successful connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    /// Id of the session now registered under the user id
    pub session_id: SessionId,
    pub connected_at: Timestamp,
    pub report: FanOutReport,
}

pub struct ConnectUserUseCase {
    registry: Arc<dyn SessionRegistry>,
    clock: Arc<dyn Clock>,
}

impl ConnectUserUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    pub async fn execute(&self, user_id: UserId, handle: SessionHandle) -> Connected {
        let connected_at = Timestamp::new(self.clock.now_millis());
        let session = Session::new(user_id.clone(), handle, connected_at);
        let session_id = session.id;

        if let Some(replaced) = self.registry.register(session).await {
            tracing::info!(
                "'{}' reconnected; session {} replaced by {}",
                user_id,
                replaced.id,
                session_id
            );
        }

        let sessions = self.registry.snapshot().await;
        tracing::info!("'{}' joined; {} online", user_id, sessions.len());

        let report = fan_out(&sessions, |recipient| {
            ChatEvent::joined(&user_id, roster_excluding(&sessions, &recipient.user_id))
        })
        .await;

        Connected {
            session_id,
            connected_at,
            report,
        }
    }
}
