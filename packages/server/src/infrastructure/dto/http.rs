//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// `GET /api/online`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineUsersDto {
    pub count: usize,
    pub users: Vec<OnlineUserDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineUserDto {
    pub user_id: String,
    /// RFC 3339, UTC
    pub connected_at: String,
}
