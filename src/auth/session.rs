//! In-memory cookie-session store.
//!
//! A session id moves between two states: absent and active. Ending a
//! session or letting it expire returns the id to absent, and an absent id
//! is indistinguishable from one that never existed, so a probing client
//! learns nothing about past sessions.
//!
//! The store is a mutex-guarded map owned by whoever builds the application
//! state and injected into handlers; every operation holds the lock for its
//! whole read-modify-write, so concurrent logout-and-relogin on the same
//! identifier cannot corrupt the map.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};

/// What the store keeps per active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    /// Authenticated identity, never empty.
    pub username: String,
    /// Unix seconds at session start.
    pub login_at: i64,
}

/// Process-lifetime session storage keyed by opaque 128-bit identifiers
/// (hex-encoded UUIDs, 32 lowercase hex characters).
///
/// Expiry is lazy: a record older than the configured TTL is removed on the
/// access that finds it stale. `None` disables expiry entirely.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
    ttl: Option<Duration>,
}

impl SessionStore {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Starts a session for an already-authenticated username and returns
    /// the fresh identifier. The caller propagates the id to the client as
    /// an opaque cookie value.
    pub fn start_session(&self, username: &str) -> String {
        debug_assert!(!username.is_empty());

        let session_id = generate_session_id();
        let record = SessionRecord {
            username: username.to_string(),
            login_at: Utc::now().timestamp(),
        };
        self.sessions.lock().insert(session_id.clone(), record);
        session_id
    }

    /// Looks up an active session.
    ///
    /// Fails `Unauthenticated` for ids that are unknown, already ended, or
    /// expired; the three cases are deliberately indistinguishable. An
    /// expired record is removed on the way out.
    pub fn load_session(&self, session_id: &str) -> Result<SessionRecord> {
        let mut sessions = self.sessions.lock();
        let record = sessions
            .get(session_id)
            .cloned()
            .ok_or_else(Error::not_authenticated)?;

        if self.is_expired(&record) {
            sessions.remove(session_id);
            return Err(Error::not_authenticated());
        }

        Ok(record)
    }

    /// Ends a session, returning its record.
    ///
    /// Ending an id that is not present fails `NotFound`: double logout is an
    /// error here, matching the reference behavior, not an idempotent no-op.
    pub fn end_session(&self, session_id: &str) -> Result<SessionRecord> {
        self.sessions
            .lock()
            .remove(session_id)
            .ok_or(Error::NotFound("session"))
    }

    /// Number of currently stored sessions, expired ones included until the
    /// access that evicts them.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    fn is_expired(&self, record: &SessionRecord) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now().timestamp() >= record.login_at + ttl.as_secs() as i64,
            None => false,
        }
    }
}

/// Fresh unpredictable session identifier: 32 lowercase hex characters from
/// a v4 UUID (cryptographically secure randomness, collision-resistant).
fn generate_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(None)
    }

    #[test]
    fn start_then_load_roundtrips() {
        let store = store();
        let before = Utc::now().timestamp();
        let id = store.start_session("john");
        let record = store.load_session(&id).unwrap();

        assert_eq!(record.username, "john");
        assert!(record.login_at >= before);
        assert!(record.login_at <= Utc::now().timestamp());
    }

    #[test]
    fn session_ids_are_32_lowercase_hex() {
        let id = store().start_session("admin");
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn ended_session_is_gone() {
        let store = store();
        let id = store.start_session("john");
        let record = store.end_session(&id).unwrap();
        assert_eq!(record.username, "john");

        let err = store.load_session(&id).unwrap_err();
        assert!(matches!(err, Error::Unauthenticated { .. }));
    }

    #[test]
    fn double_logout_is_not_found() {
        let store = store();
        let id = store.start_session("john");
        store.end_session(&id).unwrap();

        let err = store.end_session(&id).unwrap_err();
        assert!(matches!(err, Error::NotFound("session")));
    }

    #[test]
    fn unknown_id_is_unauthenticated() {
        let err = store().load_session("0123456789abcdef0123456789abcdef").unwrap_err();
        assert!(matches!(err, Error::Unauthenticated { .. }));
    }

    #[test]
    fn ids_are_unique_across_many_sessions() {
        let store = store();
        let ids: HashSet<String> = (0..10_000).map(|_| store.start_session("john")).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn zero_ttl_expires_on_next_access() {
        let store = SessionStore::new(Some(Duration::ZERO));
        let id = store.start_session("john");

        let err = store.load_session(&id).unwrap_err();
        assert!(matches!(err, Error::Unauthenticated { .. }));
        // The stale record was evicted, not merely hidden.
        assert!(store.is_empty());
    }

    #[test]
    fn generous_ttl_keeps_sessions_alive() {
        let store = SessionStore::new(Some(Duration::from_secs(3600)));
        let id = store.start_session("john");
        assert!(store.load_session(&id).is_ok());
    }

    #[test]
    fn concurrent_logout_and_relogin_does_not_corrupt_the_map() {
        let store = Arc::new(store());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for _ in 0..500 {
                    let id = store.start_session("john");
                    store.load_session(&id).unwrap();
                    store.end_session(&id).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(store.is_empty());
    }
}
