//! Data Transfer Objects.
//!
//! - `websocket`: JSON frames exchanged over the chatroom socket
//! - `http`: HTTP API response bodies
//! - `conversion`: mapping between DTOs and domain types

pub mod conversion;
pub mod http;
pub mod websocket;
