//! In-memory session registry.
//!
//! A `HashMap` behind a `tokio::sync::RwLock`. Every operation takes the lock
//! for the duration of a single map access and never across an await on a
//! session handle; `snapshot` clones the sessions out under the read lock.

use std::collections::{HashMap, hash_map::Entry};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Session, SessionId, SessionRegistry, UserId};

#[derive(Default)]
pub struct InMemorySessionRegistry {
    sessions: RwLock<HashMap<UserId, Session>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn register(&self, session: Session) -> Option<Session> {
        let user_id = session.user_id.clone();
        let replaced = self.sessions.write().await.insert(user_id.clone(), session);
        tracing::debug!("Session for '{}' registered", user_id);
        replaced
    }

    async fn unregister(&self, user_id: &UserId) -> Option<Session> {
        let removed = self.sessions.write().await.remove(user_id);
        if removed.is_some() {
            tracing::debug!("Session for '{}' unregistered", user_id);
        } else {
            tracing::debug!("No session for '{}' to unregister", user_id);
        }
        removed
    }

    async fn unregister_session(
        &self,
        user_id: &UserId,
        session_id: SessionId,
    ) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        match sessions.entry(user_id.clone()) {
            Entry::Occupied(entry) if entry.get().id == session_id => {
                tracing::debug!("Session {} for '{}' unregistered", session_id, user_id);
                Some(entry.remove())
            }
            _ => {
                tracing::debug!(
                    "Session {} for '{}' is no longer registered",
                    session_id,
                    user_id
                );
                None
            }
        }
    }

    async fn snapshot(&self) -> Vec<Session> {
        self.sessions.read().await.values().cloned().collect()
    }

    async fn lookup(&self, user_id: &UserId) -> Option<Session> {
        self.sessions.read().await.get(user_id).cloned()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, time::Duration};

    use super::*;
    use crate::{domain::Timestamp, infrastructure::sink::ChannelSink, test_support::user};

    // Sessions whose lanes are never drained; the registry never sends.
    fn session(name: &str) -> Session {
        let (sink, _rx) = ChannelSink::channel(1, Duration::from_millis(10));
        Session::new(
            user(name),
            Arc::new(sink),
            Timestamp::new(1000),
        )
    }

    #[tokio::test]
    async fn test_register_then_lookup() {
        // given:
        let registry = InMemorySessionRegistry::new();
        let alice = session("alice");
        let alice_id = alice.id;

        // when:
        let replaced = registry.register(alice).await;

        // then:
        assert!(replaced.is_none());
        assert_eq!(registry.count().await, 1);
        let found = registry.lookup(&user("alice")).await.unwrap();
        assert_eq!(found.id, alice_id);
        assert!(registry.lookup(&user("bob")).await.is_none());
    }

    #[tokio::test]
    async fn test_register_same_user_replaces_previous_session() {
        // given:
        let registry = InMemorySessionRegistry::new();
        let first = session("alice");
        let second = session("alice");
        let (first_id, second_id) = (first.id, second.id);
        registry.register(first).await;

        // when:
        let replaced = registry.register(second).await;

        // then: the old session is handed back and the count does not grow
        assert_eq!(replaced.map(|s| s.id), Some(first_id));
        assert_eq!(registry.count().await, 1);
        assert_eq!(registry.lookup(&user("alice")).await.unwrap().id, second_id);
    }

    #[tokio::test]
    async fn test_unregister_removes_session() {
        // given:
        let registry = InMemorySessionRegistry::new();
        registry.register(session("alice")).await;
        registry.register(session("bob")).await;

        // when:
        let removed = registry.unregister(&user("alice")).await;

        // then:
        assert_eq!(removed.map(|s| s.user_id), Some(user("alice")));
        assert_eq!(registry.count().await, 1);
        assert!(registry.lookup(&user("alice")).await.is_none());
    }

    #[tokio::test]
    async fn test_unregister_unknown_user_leaves_count_unchanged() {
        // given:
        let registry = InMemorySessionRegistry::new();
        registry.register(session("alice")).await;

        // when:
        let first = registry.unregister(&user("ghost")).await;
        registry.unregister(&user("alice")).await;
        let second = registry.unregister(&user("alice")).await;

        // then: count is the map size and never goes below zero
        assert!(first.is_none());
        assert!(second.is_none());
        assert_eq!(registry.count().await, 0);
        assert!(registry.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_unregister_session_removes_only_matching_session() {
        // given: alice reconnected, so her first session was replaced
        let registry = InMemorySessionRegistry::new();
        let first = session("alice");
        let second = session("alice");
        let (first_id, second_id) = (first.id, second.id);
        registry.register(first).await;
        registry.register(second).await;

        // when: the first connection goes away
        let stale = registry.unregister_session(&user("alice"), first_id).await;

        // then: the newer session is untouched
        assert!(stale.is_none());
        assert_eq!(registry.count().await, 1);
        assert_eq!(registry.lookup(&user("alice")).await.unwrap().id, second_id);

        // when: the current connection goes away
        let current = registry.unregister_session(&user("alice"), second_id).await;

        // then:
        assert_eq!(current.map(|s| s.id), Some(second_id));
        assert_eq!(registry.count().await, 0);
        assert!(
            registry
                .unregister_session(&user("alice"), second_id)
                .await
                .is_none()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_register_and_unregister_lose_no_updates() {
        // given:
        let registry = Arc::new(InMemorySessionRegistry::new());

        // when: 100 users register concurrently, then the even ones leave concurrently
        let mut handles = Vec::new();
        for i in 0..100 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.register(session(&format!("user{i}"))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        let mut handles = Vec::new();
        for i in (0..100).step_by(2) {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                registry.unregister(&user(&format!("user{i}"))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // then:
        assert_eq!(registry.count().await, 50);
        let remaining: HashSet<String> = registry
            .snapshot()
            .await
            .into_iter()
            .map(|s| s.user_id.into_string())
            .collect();
        assert!((1..100).step_by(2).all(|i| remaining.contains(&format!("user{i}"))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_snapshot_is_consistent_under_concurrent_mutation() {
        // given: a stable set of users plus a writer churning other ids
        let registry = Arc::new(InMemorySessionRegistry::new());
        for name in ["alice", "bob", "carol"] {
            registry.register(session(name)).await;
        }
        let writer = {
            let registry = registry.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    let name = format!("churn{}", i % 10);
                    registry.register(session(&name)).await;
                    tokio::task::yield_now().await;
                    registry.unregister(&user(&name)).await;
                }
            })
        };

        // when: snapshots are taken while the writer runs
        for _ in 0..200 {
            let snapshot = registry.snapshot().await;

            // then: no duplicates, and the stable users are always present
            let ids: HashSet<&str> = snapshot.iter().map(|s| s.user_id.as_str()).collect();
            assert_eq!(ids.len(), snapshot.len());
            assert!(ids.contains("alice") && ids.contains("bob") && ids.contains("carol"));
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();
        assert_eq!(registry.count().await, 3);
    }
}
