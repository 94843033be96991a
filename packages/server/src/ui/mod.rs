//! UI layer: the router boundary the transport drives, and the axum server.

pub mod error;
mod handler;
pub mod router;
mod server;
mod signal;
pub mod state;

pub use error::RouterError;
pub use router::ChatRouter;
pub use server::{Server, ServerConfig};
pub use signal::shutdown_signal;
