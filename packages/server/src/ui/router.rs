//! Chat router: the lifecycle callbacks a transport invokes per connection.
//!
//! The transport calls `on_connect` once the socket is upgraded,
//! `on_message` for every text frame, `on_error` on a socket fault and
//! `on_disconnect` (or `on_disconnect_session`) once the connection is gone. Callbacks from different
//! connections may run concurrently.

use std::sync::Arc;

use chatroom_shared::time::Clock;

use crate::{
    domain::{InboundMessage, SessionHandle, SessionId, SessionRegistry, UserId},
    infrastructure::dto::websocket::InboundMessageDto,
    usecase::{
        ConnectUserUseCase, Connected, DisconnectUserUseCase, FanOutReport, RouteMessageUseCase,
    },
};

use super::error::RouterError;

pub struct ChatRouter {
    registry: Arc<dyn SessionRegistry>,
    connect_user_usecase: ConnectUserUseCase,
    disconnect_user_usecase: DisconnectUserUseCase,
    route_message_usecase: RouteMessageUseCase,
}

impl ChatRouter {
    pub fn new(registry: Arc<dyn SessionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            connect_user_usecase: ConnectUserUseCase::new(registry.clone(), clock),
            disconnect_user_usecase: DisconnectUserUseCase::new(registry.clone()),
            route_message_usecase: RouteMessageUseCase::new(registry.clone()),
            registry,
        }
    }

    /// Register `handle` under `user_id` and announce the join.
    pub async fn on_connect(
        &self,
        user_id: &str,
        handle: SessionHandle,
    ) -> Result<Connected, RouterError> {
        let user_id = parse_user_id(user_id)?;
        Ok(self.connect_user_usecase.execute(user_id, handle).await)
    }

    /// Unregister `user_id` and announce the departure.
    pub async fn on_disconnect(&self, user_id: &str) -> Result<FanOutReport, RouterError> {
        let user_id = parse_user_id(user_id)?;
        Ok(self.disconnect_user_usecase.execute(user_id).await)
    }

    /// Decode `payload` and route it.
    ///
    /// A payload that fails to decode is returned as an error and nothing is
    /// sent.
    pub async fn on_message(
        &self,
        user_id: &str,
        payload: &str,
    ) -> Result<FanOutReport, RouterError> {
        let from = parse_user_id(user_id)?;
        let dto: InboundMessageDto = serde_json::from_str(payload)?;
        let message = InboundMessage::try_from(dto).map_err(RouterError::InvalidPayload)?;
        Ok(self.route_message_usecase.execute(from, message).await)
    }

    /// Log a transport fault. The session stays registered until the
    /// transport reports the disconnect.
    pub fn on_error(&self, user_id: &str, cause: &dyn std::error::Error) {
        tracing::error!("Connection error for '{}': {}", user_id, cause);
    }

    /// Report the end of one connection.
    ///
    /// Unlike `on_disconnect`, only `session_id` is removed: if the user has
    /// reconnected in the meantime the newer session stays and nothing is
    /// announced, in which case `None` is returned.
    pub async fn on_disconnect_session(
        &self,
        user_id: &UserId,
        session_id: SessionId,
    ) -> Option<FanOutReport> {
        self.disconnect_user_usecase
            .execute_session(user_id.clone(), session_id)
            .await
    }

    pub async fn online_count(&self) -> usize {
        self.registry.count().await
    }
}

fn parse_user_id(user_id: &str) -> Result<UserId, RouterError> {
    UserId::try_from(user_id).map_err(RouterError::InvalidUserId)
}
