//! Conversion between DTOs and domain types.

use chatroom_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatEvent, InboundMessage, Recipient, Session, ValueObjectError};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::InboundMessageDto> for InboundMessage {
    type Error = ValueObjectError;

    fn try_from(dto: dto::InboundMessageDto) -> Result<Self, Self::Error> {
        Ok(Self {
            to: Recipient::parse(&dto.to)?,
            text: dto.msg,
        })
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&ChatEvent> for dto::ChatEventDto {
    fn from(event: &ChatEvent) -> Self {
        let r#type = match event {
            ChatEvent::Open { .. } => dto::EventType::Open,
            ChatEvent::Close { .. } => dto::EventType::Close,
            ChatEvent::SendMsg { .. } => dto::EventType::SendMsg,
        };
        Self {
            r#type,
            users: event
                .users()
                .map(|users| users.iter().map(|u| u.as_str().to_string()).collect()),
            msg: event.message().to_string(),
        }
    }
}

impl From<&Session> for http::OnlineUserDto {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.as_str().to_string(),
            connected_at: timestamp_to_rfc3339(session.connected_at.value()),
        }
    }
}
