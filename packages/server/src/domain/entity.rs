//! Entities.

use std::fmt;

use super::{
    sink::SessionHandle,
    value_object::{SessionId, Timestamp, UserId},
};

/// One connected client
#[derive(Clone)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub handle: SessionHandle,
    pub connected_at: Timestamp,
}

impl Session {
    /// Create a session with a fresh [`SessionId`].
    pub fn new(user_id: UserId, handle: SessionHandle, connected_at: Timestamp) -> Self {
        Self {
            id: SessionId::generate(),
            user_id,
            handle,
            connected_at,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("connected_at", &self.connected_at)
            .finish_non_exhaustive()
    }
}
