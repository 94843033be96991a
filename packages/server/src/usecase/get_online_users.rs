//! UseCase: list the users currently online.

use std::sync::Arc;

use crate::domain::{Session, SessionRegistry};

pub struct GetOnlineUsersUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl GetOnlineUsersUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Registered sessions sorted by user id
    pub async fn execute(&self) -> Vec<Session> {
        let mut sessions = self.registry.snapshot().await;
        sessions.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        sessions
    }
}
