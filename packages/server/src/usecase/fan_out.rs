//! Concurrent delivery of events to a set of sessions.

use futures_util::future::join_all;

use crate::domain::{ChatEvent, Session, UserId};

/// Outcome of one fan-out.
///
/// Informational only: failed recipients have already been logged and stay
/// registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub delivered: Vec<UserId>,
    pub failed: Vec<UserId>,
}

impl FanOutReport {
    /// Nobody was addressed.
    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty() && self.failed.is_empty()
    }
}

/// Send one event per recipient, built by `build`, to every session in
/// `recipients`.
///
/// All sends run concurrently; a failing or slow recipient only affects its
/// own entry in the report.
pub async fn fan_out<F>(recipients: &[Session], mut build: F) -> FanOutReport
where
    F: FnMut(&Session) -> ChatEvent,
{
    let sends = recipients.iter().map(|session| {
        let event = build(session);
        async move { (session, session.handle.send(event).await) }
    });

    let mut report = FanOutReport::default();
    for (session, result) in join_all(sends).await {
        match result {
            Ok(()) => {
                tracing::debug!("Delivered event to '{}'", session.user_id);
                report.delivered.push(session.user_id.clone());
            }
            Err(e) => {
                tracing::warn!("Failed to deliver event to '{}': {}", session.user_id, e);
                report.failed.push(session.user_id.clone());
            }
        }
    }
    report
}

/// Ids of every session in `sessions` except `recipient`, sorted.
pub fn roster_excluding(sessions: &[Session], recipient: &UserId) -> Vec<UserId> {
    let mut users: Vec<UserId> = sessions
        .iter()
        .map(|s| &s.user_id)
        .filter(|id| *id != recipient)
        .cloned()
        .collect();
    users.sort();
    users
}
