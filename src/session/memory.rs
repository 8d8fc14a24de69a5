use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use super::{SessionData, SessionId, SessionStore};

#[derive(Debug)]
struct Entry {
    data: SessionData,
    touched: Instant,
}

/// In-process session store with an idle timeout.
///
/// Expired sessions are never returned by `load` and are swept out whenever a
/// session is saved, so memory holds at most the sessions saved within one TTL
/// window.
#[derive(Clone, Debug)]
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: Arc<Mutex<HashMap<SessionId, Entry>>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of stored sessions, including any expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session store lock poisoned").len()
    }

    /// Ids of sessions that have not expired.
    pub fn ids(&self) -> Vec<SessionId> {
        let now = Instant::now();
        let sessions = self.sessions.lock().expect("session store lock poisoned");
        sessions
            .iter()
            .filter(|(_, entry)| !self.is_expired(entry, now))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.touched) >= self.ttl
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, id: &SessionId) -> Option<SessionData> {
        let sessions = self.sessions.lock().expect("session store lock poisoned");
        let entry = sessions.get(id)?;
        if self.is_expired(entry, Instant::now()) {
            return None;
        }
        Some(entry.data.clone())
    }

    fn save(&self, id: SessionId, data: SessionData) {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");

        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        let swept = before - sessions.len();
        if swept > 0 {
            tracing::debug!(swept, "dropped expired sessions");
        }

        sessions.insert(id, Entry { data, touched: now });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with_list(name: &str) -> SessionData {
        let mut data = SessionData::default();
        data.lists.create_list(name).unwrap();
        data
    }

    #[test]
    fn load_returns_saved_data() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        let id = SessionId::new();

        store.save(id, data_with_list("Work"));

        let loaded = store.load(&id).expect("session missing");
        assert_eq!(loaded.lists.get(0).unwrap().name, "Work");
    }

    #[test]
    fn unknown_session_loads_nothing() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        assert!(store.load(&SessionId::new()).is_none());
    }

    #[test]
    fn sessions_are_independent() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        let first = SessionId::new();
        let second = SessionId::new();

        store.save(first, data_with_list("Mine"));
        store.save(second, SessionData::default());

        assert_eq!(store.load(&first).unwrap().lists.len(), 1);
        assert!(store.load(&second).unwrap().lists.is_empty());
    }

    #[test]
    fn ids_lists_only_live_sessions() {
        let store = MemorySessionStore::new(Duration::from_secs(60));
        let id = SessionId::new();
        store.save(id, SessionData::default());

        assert_eq!(store.ids(), vec![id]);

        let expired = MemorySessionStore::new(Duration::ZERO);
        expired.save(SessionId::new(), SessionData::default());
        assert!(expired.ids().is_empty());
    }

    #[test]
    fn expired_sessions_are_hidden_and_swept() {
        let store = MemorySessionStore::new(Duration::ZERO);
        let stale = SessionId::new();

        store.save(stale, data_with_list("Old"));
        assert!(store.load(&stale).is_none());

        store.save(SessionId::new(), SessionData::default());
        assert_eq!(store.len(), 1);
    }
}
