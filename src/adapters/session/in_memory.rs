//! In-Memory Session Store Adapter
//!
//! Keeps every conversation in a process-wide map. Each session's state
//! sits behind its own mutex, so concurrent turns for different sessions
//! proceed independently while two turns for the same session serialize.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionMutation, SessionStore, SessionStoreError};

type SessionSlot = Arc<Mutex<ConversationContext>>;

/// In-memory storage for conversation state.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionSlot>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every session (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    async fn slot(&self, session_id: &SessionId) -> Option<SessionSlot> {
        self.sessions.read().await.get(session_id).cloned()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(
        &self,
        session_id: &SessionId,
    ) -> Result<ConversationContext, SessionStoreError> {
        if let Some(slot) = self.slot(session_id).await {
            return Ok(slot.lock().await.clone());
        }

        let slot = {
            let mut sessions = self.sessions.write().await;
            sessions
                .entry(session_id.clone())
                .or_insert_with(|| {
                    Arc::new(Mutex::new(ConversationContext::new(session_id.clone())))
                })
                .clone()
        };
        let ctx = slot.lock().await.clone();
        Ok(ctx)
    }

    async fn update(
        &self,
        session_id: &SessionId,
        mutation: SessionMutation,
    ) -> Result<ConversationContext, SessionStoreError> {
        let slot = self
            .slot(session_id)
            .await
            .ok_or_else(|| SessionStoreError::NotFound(session_id.clone()))?;

        let mut context = slot.lock().await;
        mutation(&mut context);
        Ok(context.clone())
    }

    async fn evict(&self, session_id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requirements::{RequirementDelta, RequirementKey};

    fn sid(name: &str) -> SessionId {
        SessionId::new(name).unwrap()
    }

    fn category_mutation(category: &'static str) -> SessionMutation {
        Box::new(move |ctx| {
            let mut d = RequirementDelta::new();
            d.set(RequirementKey::Category, category);
            ctx.record_turn(format!("looking for {}", category), d);
        })
    }

    #[tokio::test]
    async fn get_or_create_creates_fresh_state() {
        let store = InMemorySessionStore::new();
        let ctx = store.get_or_create(&sid("tab-1")).await.unwrap();

        assert_eq!(ctx.session_id, sid("tab-1"));
        assert!(ctx.requirements().is_empty());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&sid("tab-1")).await.unwrap();
        store
            .update(&sid("tab-1"), category_mutation("smartphones"))
            .await
            .unwrap();

        // A second get_or_create returns the existing state, not fresh state.
        let ctx = store.get_or_create(&sid("tab-1")).await.unwrap();
        assert_eq!(ctx.requirements().category(), Some("smartphones"));
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn update_returns_post_mutation_snapshot() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&sid("tab-1")).await.unwrap();

        let ctx = store
            .update(&sid("tab-1"), category_mutation("laptops"))
            .await
            .unwrap();
        assert_eq!(ctx.requirements().category(), Some("laptops"));
        assert_eq!(ctx.turn_count(), 1);
    }

    #[tokio::test]
    async fn update_unknown_session_is_not_found() {
        let store = InMemorySessionStore::new();
        let result = store.update(&sid("ghost"), Box::new(|_| {})).await;
        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&sid("tab-1")).await.unwrap();
        store.get_or_create(&sid("tab-2")).await.unwrap();

        store
            .update(&sid("tab-1"), category_mutation("smartphones"))
            .await
            .unwrap();

        let untouched = store.get_or_create(&sid("tab-2")).await.unwrap();
        assert!(untouched.requirements().is_empty());
    }

    #[tokio::test]
    async fn evict_drops_the_session() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&sid("tab-1")).await.unwrap();
        assert_eq!(store.session_count().await, 1);

        store.evict(&sid("tab-1")).await.unwrap();
        assert_eq!(store.session_count().await, 0);

        let result = store.update(&sid("tab-1"), Box::new(|_| {})).await;
        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn concurrent_updates_to_one_session_all_land() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&sid("tab-1")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update(
                        &sid("tab-1"),
                        Box::new(move |ctx| {
                            ctx.record_turn(format!("turn {}", i), RequirementDelta::new());
                        }),
                    )
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let ctx = store.get_or_create(&sid("tab-1")).await.unwrap();
        assert_eq!(ctx.turn_count(), 10);
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&sid("tab-1")).await.unwrap();
        store.get_or_create(&sid("tab-2")).await.unwrap();

        store.clear().await;
        assert_eq!(store.session_count().await, 0);
    }
}
