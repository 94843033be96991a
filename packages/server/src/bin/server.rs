//! Chatroom server.
//!
//! Users connect to `/chatroom/<name>`; join/leave notices and chat lines are
//! pushed to every connected user, `@name` messages only to `name`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatroom-server
//! cargo run --bin chatroom-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{sync::Arc, time::Duration};

use chatroom_server::{
    infrastructure::registry::InMemorySessionRegistry,
    ui::{ChatRouter, Server, ServerConfig},
    usecase::GetOnlineUsersUseCase,
};
use chatroom_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatroom-server")]
#[command(about = "WebSocket chatroom server with presence, broadcast and private messages", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// How long a fan-out waits on one client's full outbound lane
    #[arg(long, default_value = "1000")]
    send_timeout_ms: u64,

    /// Number of events buffered per client before sends start waiting
    #[arg(long, default_value = "64")]
    outbound_buffer: usize,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Wiring order: registry -> router / use cases -> server
    let registry = Arc::new(InMemorySessionRegistry::new());
    let router = Arc::new(ChatRouter::new(registry.clone(), Arc::new(SystemClock)));
    let get_online_users_usecase = Arc::new(GetOnlineUsersUseCase::new(registry));

    let config = ServerConfig {
        outbound_buffer: args.outbound_buffer,
        send_timeout: Duration::from_millis(args.send_timeout_ms),
    };

    let server = Server::new(router, get_online_users_usecase, config);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
