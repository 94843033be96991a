//! Domain errors.

use std::time::Duration;

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("user id is too long ({length} > {max} characters)")]
    UserIdTooLong { length: usize, max: usize },

    #[error("recipient must not be empty")]
    EmptyRecipient,
}

/// Failure to hand an event to one session's outbound lane
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The connection's writer has gone away
    #[error("outbound lane is closed")]
    Closed,

    /// The lane stayed full for the whole send timeout
    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}
