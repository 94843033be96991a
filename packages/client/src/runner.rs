//! Client execution logic with reconnection support.

use std::time::Duration;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use super::{error::ClientError, session::run_client_session};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL: Duration = Duration::from_secs(5);

/// Run the client until the user quits.
///
/// Lost connections are retried; a rejected name is not.
pub async fn run_client(url: String, name: String) -> Result<(), ClientError> {
    let mut input_rx = spawn_readline(name.clone());
    let mut attempt = 1;

    loop {
        tracing::info!(
            "Connecting to {} as '{}' (attempt {}/{})",
            url,
            name,
            attempt,
            MAX_RECONNECT_ATTEMPTS
        );

        match run_client_session(&url, &name, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Session ended");
                return Ok(());
            }
            Err(e @ ClientError::InvalidName(_)) => return Err(e),
            Err(e) => {
                tracing::warn!("Connection lost: {}", e);
                if attempt >= MAX_RECONNECT_ATTEMPTS {
                    tracing::error!("Giving up after {} attempts", MAX_RECONNECT_ATTEMPTS);
                    return Err(e);
                }
                attempt += 1;
                tracing::info!("Reconnecting in {:?}...", RECONNECT_INTERVAL);
                tokio::time::sleep(RECONNECT_INTERVAL).await;
            }
        }
    }
}

/// Read lines on a dedicated thread (rustyline is blocking).
///
/// The returned channel closes on Ctrl+C, Ctrl+D or a readline failure.
fn spawn_readline(name: String) -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };
        let prompt = format!("{}> ", name);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("Readline error: {}", e);
                    break;
                }
            }
        }
    });

    input_rx
}
