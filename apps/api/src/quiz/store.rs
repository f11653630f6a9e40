use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::quiz::session::{QuizError, QuizSession};

/// In-memory quiz sessions, one per visitor run. Lost on restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: QuizSession) {
        debug!("Created quiz session {}", session.id);
        self.sessions.write().await.insert(session.id, session);
    }

    pub async fn get(&self, id: Uuid) -> Result<QuizSession, QuizError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(QuizError::SessionNotFound(id))
    }

    /// Applies a transition under the write lock and stores the new value.
    /// On error the stored session is left as it was.
    pub async fn update<F>(&self, id: Uuid, transition: F) -> Result<QuizSession, QuizError>
    where
        F: FnOnce(&QuizSession) -> Result<QuizSession, QuizError>,
    {
        let mut sessions = self.sessions.write().await;
        let current = sessions.get(&id).ok_or(QuizError::SessionNotFound(id))?;
        let next = transition(current)?;
        sessions.insert(id, next.clone());
        Ok(next)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions untouched for longer than `max_idle`. Returns how many.
    pub async fn purge_idle(&self, max_idle: chrono::Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= cutoff);
        before - sessions.len()
    }
}

/// Periodically purges idle sessions for the lifetime of the process.
pub fn spawn_purge_task(
    store: SessionStore,
    max_idle: chrono::Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let purged = store.purge_idle(max_idle).await;
            if purged > 0 {
                info!(
                    "Purged {purged} idle quiz sessions ({} active)",
                    store.len().await
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::quiz::session::QuizPhase;

    #[tokio::test]
    async fn test_insert_get_update() {
        let catalog = Catalog::builtin();
        let store = SessionStore::new();
        let session = QuizSession::new(&catalog);
        let id = session.id;
        store.insert(session).await;

        let started = store.update(id, |s| s.start()).await.unwrap();
        assert_eq!(started.phase, QuizPhase::InProgress { stage: 1 });
        assert_eq!(store.get(id).await.unwrap().phase, started.phase);
    }

    #[tokio::test]
    async fn test_failed_transition_leaves_session_unchanged() {
        let catalog = Catalog::builtin();
        let store = SessionStore::new();
        let session = QuizSession::new(&catalog);
        let id = session.id;
        store.insert(session).await;

        assert!(store.update(id, |s| s.back(&catalog)).await.is_err());
        assert_eq!(store.get(id).await.unwrap().phase, QuizPhase::NotStarted);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        assert_eq!(
            store.get(id).await.unwrap_err(),
            QuizError::SessionNotFound(id)
        );
        assert!(store.update(id, |s| s.start()).await.is_err());
    }

    #[tokio::test]
    async fn test_purge_idle() {
        let catalog = Catalog::builtin();
        let store = SessionStore::new();

        let mut stale = QuizSession::new(&catalog);
        stale.updated_at = Utc::now() - chrono::Duration::hours(3);
        store.insert(stale).await;
        store.insert(QuizSession::new(&catalog)).await;

        assert_eq!(store.purge_idle(chrono::Duration::hours(1)).await, 1);
        assert_eq!(store.len().await, 1);
    }
}
