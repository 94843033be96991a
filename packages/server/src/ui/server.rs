//! Server execution logic.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::GetOnlineUsersUseCase;

use super::{
    handler::{health_check, online_users, websocket_handler},
    router::ChatRouter,
    signal::shutdown_signal,
    state::AppState,
};

/// Tunables for the per-connection outbound lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub outbound_buffer: usize,
    pub send_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            outbound_buffer: 64,
            send_timeout: Duration::from_millis(1000),
        }
    }
}

/// Chatroom HTTP/WebSocket server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(router, get_online_users_usecase, ServerConfig::default());
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    router: Arc<ChatRouter>,
    get_online_users_usecase: Arc<GetOnlineUsersUseCase>,
    config: ServerConfig,
}

impl Server {
    pub fn new(
        router: Arc<ChatRouter>,
        get_online_users_usecase: Arc<GetOnlineUsersUseCase>,
        config: ServerConfig,
    ) -> Self {
        Self {
            router,
            get_online_users_usecase,
            config,
        }
    }

    /// Build the axum application.
    pub fn app(&self) -> Router {
        let app_state = Arc::new(AppState {
            router: self.router.clone(),
            get_online_users_usecase: self.get_online_users_usecase.clone(),
            outbound_buffer: self.config.outbound_buffer,
            send_timeout: self.config.send_timeout,
        });

        Router::new()
            // WebSocket endpoint
            .route("/chatroom/{name}", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/online", get(online_users))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Bind to `host:port` and serve until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or serving fails.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chatroom server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/chatroom/<name>", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.app())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
