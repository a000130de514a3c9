//! In-memory session store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use delve_core::entity::{PlayerId, SessionId};

use crate::error::{EngineError, Result};
use crate::repository::SessionRepository;
use crate::session::Session;

/// In-memory session store.
#[derive(Default)]
pub struct InMemorySessions {
    rows: Mutex<HashMap<u64, Session>>,
    next_id: AtomicU64,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn create(&self, mut session: Session) -> Result<Session> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        session.id = SessionId(id);
        self.rows.lock().unwrap().insert(id, session.clone());
        Ok(session)
    }

    async fn find(&self, id: SessionId) -> Result<Option<Session>> {
        Ok(self.rows.lock().unwrap().get(&id.0).cloned())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&session.id.0) {
            return Err(EngineError::not_found("session", session.id));
        }
        rows.insert(session.id.0, session.clone());
        Ok(())
    }

    async fn delete(&self, id: SessionId) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| EngineError::not_found("session", id))
    }

    async fn find_active_by_player(&self, player_id: PlayerId) -> Result<Option<Session>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|s| s.player_id == player_id && s.is_active)
            .cloned())
    }

    async fn list_by_player(&self, player_id: PlayerId) -> Result<Vec<Session>> {
        let rows = self.rows.lock().unwrap();
        let mut sessions: Vec<Session> = rows
            .values()
            .filter(|s| s.player_id == player_id)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.id);
        Ok(sessions)
    }
}
