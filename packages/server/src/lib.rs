//! Chatroom server library.
//!
//! Tracks connected users, broadcasts presence and chat events to every
//! connected session and routes private messages to a single recipient.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

#[cfg(test)]
pub(crate) mod test_support;
