//! One WebSocket session with the chatroom server.

use std::io::Write;

use chatroom_server::infrastructure::dto::websocket::ChatEventDto;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
};

use crate::{
    error::ClientError,
    formatter::{format_event, format_raw},
    input::parse_line,
};

/// Join the chatroom at `<url>/<name>` and relay until the user quits or the
/// connection drops.
///
/// Returns `Ok(())` when the input side closes (Ctrl+C / Ctrl+D).
pub async fn run_client_session(
    url: &str,
    name: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let url = format!("{}/{}", url.trim_end_matches('/'), name);

    let (ws_stream, _response) = match connect_async(&url).await {
        Ok(result) => result,
        Err(tungstenite::Error::Http(response)) if response.status().as_u16() == 400 => {
            return Err(ClientError::InvalidName(name.to_string()));
        }
        Err(e) => return Err(ClientError::Connection(e.to_string())),
    };

    tracing::info!("Connected to {}", url);
    println!(
        "\nYou are '{}'. Type a message to send it to everyone, or '@name message' to whisper. Ctrl+C to exit.\n",
        name
    );

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            frame = read.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    let line = match serde_json::from_str::<ChatEventDto>(text.as_str()) {
                        Ok(event) => format_event(&event),
                        Err(_) => format_raw(text.as_str()),
                    };
                    print_above_prompt(&line, name);
                }
                Some(Ok(Message::Close(_))) | None => {
                    return Err(ClientError::Connection("server closed the connection".to_string()));
                }
                Some(Err(e)) => return Err(ClientError::Connection(e.to_string())),
                Some(Ok(_)) => {}
            },
            line = input_rx.recv() => match line {
                Some(line) => {
                    if let Some(json) = encode_line(&line) {
                        write
                            .send(Message::Text(json.into()))
                            .await
                            .map_err(|e| ClientError::Connection(e.to_string()))?;
                    }
                }
                None => {
                    let _ = write.send(Message::Close(None)).await;
                    return Ok(());
                }
            },
        }
    }
}

/// JSON frame for one input line, `None` if there is nothing to send.
fn encode_line(line: &str) -> Option<String> {
    let message = parse_line(line)?;
    match serde_json::to_string(&message) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize message: {}", e);
            None
        }
    }
}

fn print_above_prompt(line: &str, name: &str) {
    print!("\r{}\n{}> ", line, name);
    std::io::stdout().flush().ok();
}
