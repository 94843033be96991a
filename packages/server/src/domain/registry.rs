//! Session registry port.

use async_trait::async_trait;

use super::{
    entity::Session,
    value_object::{SessionId, UserId},
};

/// Concurrency-safe map from user id to the session currently registered
/// under it.
///
/// Implementations must tolerate any interleaving of calls from concurrent
/// connections. `snapshot` returns an owned point-in-time copy so callers can
/// iterate while other tasks register and unregister.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Insert or replace the session for `session.user_id`.
    ///
    /// Returns the replaced session. Its handle receives no notice.
    async fn register(&self, session: Session) -> Option<Session>;

    /// Remove the session for `user_id`, if any.
    async fn unregister(&self, user_id: &UserId) -> Option<Session>;

    /// Remove the session for `user_id` only if it is still `session_id`.
    ///
    /// The check and the removal happen atomically, so a connection that has
    /// been superseded by a reconnect can never remove its successor.
    async fn unregister_session(
        &self,
        user_id: &UserId,
        session_id: SessionId,
    ) -> Option<Session>;

    /// Owned copy of every registered session.
    async fn snapshot(&self) -> Vec<Session>;

    async fn lookup(&self, user_id: &UserId) -> Option<Session>;

    /// Number of registered sessions.
    async fn count(&self) -> usize;
}
