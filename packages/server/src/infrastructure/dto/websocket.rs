//! WebSocket wire format.
//!
//! Inbound: `{"to": "all" | "<user>", "msg": "..."}`
//!
//! Outbound: `{"type": "open" | "close" | "sendMsg", "users": [...], "msg": "..."}`,
//! where `users` is only present on presence events.

use serde::{Deserialize, Serialize};

/// Chat line sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessageDto {
    pub to: String,
    pub msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    Open,
    Close,
    SendMsg,
}

/// Event pushed to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEventDto {
    pub r#type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    pub msg: String,
}
