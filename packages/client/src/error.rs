//! Client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the name (HTTP 400 on upgrade)
    #[error("server rejected name '{0}'")]
    InvalidName(String),

    #[error("connection error: {0}")]
    Connection(String),
}
