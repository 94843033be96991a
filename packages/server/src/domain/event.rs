//! Inbound and outbound chat events.

use super::{
    error::ValueObjectError,
    value_object::{BROADCAST_SENTINEL, UserId},
};

/// Kind tag of an outbound event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEventKind {
    Open,
    Close,
    SendMsg,
}

/// Event pushed to a session.
///
/// Presence events carry the roster of other online users as seen by the
/// recipient: every registered id except the recipient's own, sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A user joined
    Open { users: Vec<UserId>, message: String },
    /// A user left
    Close { users: Vec<UserId>, message: String },
    /// Broadcast or private chat line
    SendMsg { message: String },
}

impl ChatEvent {
    pub fn joined(user_id: &UserId, users: Vec<UserId>) -> Self {
        Self::Open {
            users,
            message: format!("{user_id} joined"),
        }
    }

    pub fn left(user_id: &UserId, users: Vec<UserId>) -> Self {
        Self::Close {
            users,
            message: format!("{user_id} left"),
        }
    }

    pub fn broadcast(from: &UserId, text: &str) -> Self {
        Self::SendMsg {
            message: format!("(broadcast) {from}: {text}"),
        }
    }

    pub fn private(from: &UserId, text: &str) -> Self {
        Self::SendMsg {
            message: format!("(private) {from}: {text}"),
        }
    }

    pub fn kind(&self) -> ChatEventKind {
        match self {
            Self::Open { .. } => ChatEventKind::Open,
            Self::Close { .. } => ChatEventKind::Close,
            Self::SendMsg { .. } => ChatEventKind::SendMsg,
        }
    }

    /// Roster attached to presence events, `None` for chat lines.
    pub fn users(&self) -> Option<&[UserId]> {
        match self {
            Self::Open { users, .. } | Self::Close { users, .. } => Some(users),
            Self::SendMsg { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Open { message, .. } | Self::Close { message, .. } | Self::SendMsg { message } => {
                message
            }
        }
    }
}

/// Who an inbound chat line is addressed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    All,
    User(UserId),
    /// An address no user can be registered under
    Unknown(String),
}

impl Recipient {
    /// Interpret the `to` field of an inbound payload.
    ///
    /// Only a blank address is an error. Anything that is not a valid user id
    /// is kept as `Unknown`, which routes nowhere.
    pub fn parse(to: &str) -> Result<Self, ValueObjectError> {
        if to == BROADCAST_SENTINEL {
            return Ok(Self::All);
        }
        if to.trim().is_empty() {
            return Err(ValueObjectError::EmptyRecipient);
        }
        Ok(UserId::try_from(to).map_or_else(|_| Self::Unknown(to.to_string()), Self::User))
    }
}

/// Decoded chat line sent by a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub to: Recipient,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user;

    #[test]
    fn test_presence_events_carry_roster_and_text() {
        // given:
        let carol = user("carol");

        // when:
        let joined = ChatEvent::joined(&carol, vec![user("alice"), user("bob")]);
        let left = ChatEvent::left(&carol, vec![]);

        // then:
        assert_eq!(joined.kind(), ChatEventKind::Open);
        assert_eq!(joined.message(), "carol joined");
        assert_eq!(joined.users(), Some(&[user("alice"), user("bob")][..]));
        assert_eq!(left.kind(), ChatEventKind::Close);
        assert_eq!(left.message(), "carol left");
        assert_eq!(left.users(), Some(&[][..]));
    }

    #[test]
    fn test_chat_lines_have_no_roster() {
        // given:
        let alice = user("alice");

        // when:
        let broadcast = ChatEvent::broadcast(&alice, "hi");
        let private = ChatEvent::private(&alice, "psst");

        // then:
        assert_eq!(broadcast.kind(), ChatEventKind::SendMsg);
        assert_eq!(broadcast.message(), "(broadcast) alice: hi");
        assert_eq!(broadcast.users(), None);
        assert_eq!(private.message(), "(private) alice: psst");
    }

    #[test]
    fn test_recipient_parse() {
        assert_eq!(Recipient::parse("all"), Ok(Recipient::All));
        assert_eq!(Recipient::parse("bob"), Ok(Recipient::User(user("bob"))));
        assert_eq!(Recipient::parse(""), Err(ValueObjectError::EmptyRecipient));
        // the sentinel is case-sensitive
        assert_eq!(Recipient::parse("ALL"), Ok(Recipient::User(user("ALL"))));
        // too long to ever be registered
        let long = "x".repeat(UserId::MAX_LENGTH + 1);
        assert_eq!(Recipient::parse(&long), Ok(Recipient::Unknown(long.clone())));
    }
}
