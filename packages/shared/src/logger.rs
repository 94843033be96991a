//! Logging setup for the chatroom binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// The filter defaults to `default_log_level` for the chatroom crates and for
/// the calling binary. `RUST_LOG` overrides it entirely.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g. "chatroom-server")
/// * `default_log_level` - The default log level (e.g. "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use chatroom_shared::logger::setup_logger;
///
/// setup_logger("chatroom-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(binary_name: &str, level: &str) -> String {
    format!(
        "chatroom_server={level},chatroom_client={level},{}={level},tower_http={level}",
        binary_name.replace('-', "_"),
    )
}
