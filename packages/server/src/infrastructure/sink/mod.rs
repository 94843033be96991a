//! Outbound sink implementations.

pub mod channel;

pub use channel::ChannelSink;
