//! Rendering server events for the terminal.

use chatroom_server::infrastructure::dto::websocket::{ChatEventDto, EventType};

/// Format one event as a display line (without trailing newline).
pub fn format_event(event: &ChatEventDto) -> String {
    match event.r#type {
        EventType::Open => format!("[join] {}{}", event.msg, roster_suffix(event)),
        EventType::Close => format!("[leave] {}{}", event.msg, roster_suffix(event)),
        EventType::SendMsg => format!("[chat] {}", event.msg),
    }
}

/// Format a frame that is not a known event.
pub fn format_raw(text: &str) -> String {
    format!("[raw] {text}")
}

fn roster_suffix(event: &ChatEventDto) -> String {
    match event.users.as_deref() {
        Some([]) | None => "  (nobody else online)".to_string(),
        Some(users) => format!("  (online: {})", users.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(r#type: EventType, users: Option<Vec<&str>>, msg: &str) -> ChatEventDto {
        ChatEventDto {
            r#type,
            users: users.map(|u| u.into_iter().map(String::from).collect()),
            msg: msg.to_string(),
        }
    }

    #[test]
    fn test_format_join_with_roster() {
        let line = format_event(&event(EventType::Open, Some(vec!["bob", "carol"]), "carol joined"));
        assert_eq!(line, "[join] carol joined  (online: bob, carol)");
    }

    #[test]
    fn test_format_leave_when_alone() {
        let line = format_event(&event(EventType::Close, Some(vec![]), "bob left"));
        assert_eq!(line, "[leave] bob left  (nobody else online)");
    }

    #[test]
    fn test_format_chat_line() {
        let line = format_event(&event(EventType::SendMsg, None, "(private) alice: psst"));
        assert_eq!(line, "[chat] (private) alice: psst");
    }

    #[test]
    fn test_format_raw() {
        assert_eq!(format_raw("???"), "[raw] ???");
    }
}
