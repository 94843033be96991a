//! Shared application state.

use std::{sync::Arc, time::Duration};

use crate::usecase::GetOnlineUsersUseCase;

use super::router::ChatRouter;

pub struct AppState {
    pub router: Arc<ChatRouter>,
    pub get_online_users_usecase: Arc<GetOnlineUsersUseCase>,
    /// Capacity of each connection's outbound lane
    pub outbound_buffer: usize,
    /// Longest a fan-out waits on one full lane
    pub send_timeout: Duration,
}
