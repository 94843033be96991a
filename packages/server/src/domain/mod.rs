//! Domain layer: value objects, entities, events and the ports the use cases
//! depend on.

pub mod entity;
pub mod error;
pub mod event;
pub mod registry;
pub mod sink;
pub mod value_object;

pub use entity::Session;
pub use error::{SendError, ValueObjectError};
pub use event::{ChatEvent, ChatEventKind, InboundMessage, Recipient};
pub use registry::SessionRegistry;
pub use sink::{OutboundSink, SessionHandle};
#[cfg(test)]
pub use sink::MockOutboundSink;
pub use value_object::{BROADCAST_SENTINEL, SessionId, Timestamp, UserId};
