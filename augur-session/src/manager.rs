//! SessionManager — concurrent per-session access via DashMap.
//!
//! The engine itself is stateless across sessions; this map is the only
//! shared structure, and each entry belongs to exactly one end user.

use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::state::SessionState;

pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionState>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Store a fresh session under a new id and return the id.
    pub fn create_session(&self, mut state: SessionState) -> String {
        let session_id = Uuid::new_v4().to_string();
        state.session_id = session_id.clone();
        self.sessions.insert(session_id.clone(), state);
        session_id
    }

    /// Cloned snapshot of a session's state.
    pub fn get_session(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Write back a mutated session state.
    pub fn update_session(&self, state: SessionState) {
        self.sessions.insert(state.session_id.clone(), state);
    }

    /// Abandonment is just dropping the state.
    pub fn remove_session(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
