//! Turning typed lines into outbound chat messages.

use chatroom_server::{domain::BROADCAST_SENTINEL, infrastructure::dto::websocket::InboundMessageDto};

/// Parse one input line.
///
/// `@bob some text` is a private message to `bob`; any other non-blank line
/// goes to everyone. Blank lines and a bare `@bob` yield `None`.
pub fn parse_line(line: &str) -> Option<InboundMessageDto> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix('@') {
        let (to, msg) = rest.split_once(char::is_whitespace)?;
        let msg = msg.trim();
        if to.is_empty() || msg.is_empty() {
            return None;
        }
        return Some(InboundMessageDto {
            to: to.to_string(),
            msg: msg.to_string(),
        });
    }

    Some(InboundMessageDto {
        to: BROADCAST_SENTINEL.to_string(),
        msg: line.to_string(),
    })
}
