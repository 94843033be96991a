//! Helpers shared by the unit tests.

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;

use crate::{
    domain::{ChatEvent, SessionHandle, Session, Timestamp, UserId},
    infrastructure::sink::ChannelSink,
};

pub const TEST_SEND_TIMEOUT: Duration = Duration::from_millis(50);

pub fn user(name: &str) -> UserId {
    UserId::try_from(name).unwrap()
}

/// Handle backed by a real lane, plus the lane's receiving end.
pub fn channel_handle() -> (SessionHandle, mpsc::Receiver<ChatEvent>) {
    let (sink, rx) = ChannelSink::channel(16, TEST_SEND_TIMEOUT);
    (Arc::new(sink), rx)
}

pub fn channel_session(name: &str) -> (Session, mpsc::Receiver<ChatEvent>) {
    let (handle, rx) = channel_handle();
    (Session::new(user(name), handle, Timestamp::new(0)), rx)
}

/// Everything currently queued on a lane.
pub fn drain(rx: &mut mpsc::Receiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
