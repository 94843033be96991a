//! Errors surfaced to the transport by the chat router.

use thiserror::Error;

use crate::domain::ValueObjectError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid user id: {0}")]
    InvalidUserId(#[source] ValueObjectError),

    /// Payload is not the expected JSON shape
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Payload parsed but a field is unusable
    #[error("invalid payload: {0}")]
    InvalidPayload(#[source] ValueObjectError),
}
