//! CLI client for the chatroom server.

pub mod error;
pub mod formatter;
pub mod input;
mod runner;
mod session;

pub use runner::run_client;
