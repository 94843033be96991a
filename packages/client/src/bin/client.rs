//! Chatroom CLI client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chatroom-client -- --name alice
//! cargo run --bin chatroom-client -- -n bob -u ws://127.0.0.1:3000/chatroom
//! ```

use chatroom_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatroom-client")]
#[command(about = "Chatroom client: broadcast by default, '@name message' to whisper", long_about = None)]
struct Args {
    /// Name to join the chatroom with
    #[arg(short = 'n', long)]
    name: String,

    /// Chatroom base URL; the name is appended as the last path segment
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/chatroom")]
    url: String,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = chatroom_client::run_client(args.url, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
