//! Session Store Port - Owner of per-session conversation state.
//!
//! All mutation of conversation state goes through this interface, which
//! lets adapters serialize read-modify-write cycles per session. Two
//! concurrent turns for the same session must never interleave a merge.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::SessionId;

/// A state change applied under the session's lock.
pub type SessionMutation = Box<dyn FnOnce(&mut ConversationContext) + Send>;

/// Errors the session store can produce.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session storage failed: {0}")]
    StorageFailed(String),
}

/// Port for session state ownership.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session's state, creating fresh state on first contact.
    async fn get_or_create(
        &self,
        session_id: &SessionId,
    ) -> Result<ConversationContext, SessionStoreError>;

    /// Applies a mutation under the session's lock and returns the
    /// post-mutation snapshot.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if the session was never
    /// created (or already evicted).
    async fn update(
        &self,
        session_id: &SessionId,
        mutation: SessionMutation,
    ) -> Result<ConversationContext, SessionStoreError>;

    /// Drops a session's state entirely.
    async fn evict(&self, session_id: &SessionId) -> Result<(), SessionStoreError>;

    /// Number of live sessions.
    async fn session_count(&self) -> usize;
}
