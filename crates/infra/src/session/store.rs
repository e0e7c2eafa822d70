use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use magazyn_core::SessionId;

use super::Session;

/// Session registry abstraction.
///
/// Sessions are fully isolated: no operation on one id can observe or change
/// another session's state.
pub trait SessionStore: Send + Sync {
    /// Resolve `id` to a live session, starting a fresh seeded one when the id
    /// is missing, unknown or expired. Returns the live id and whether it was
    /// newly created.
    fn open(&self, id: Option<SessionId>, now: DateTime<Utc>) -> (SessionId, bool);

    /// Run `f` against the session with exclusive access.
    ///
    /// Returns `None` if the session no longer exists.
    fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R>;

    /// Drop a session. Returns whether it existed.
    fn end(&self, id: SessionId) -> bool;

    /// Drop every session idle for longer than the configured TTL.
    fn prune_idle(&self, now: DateTime<Utc>) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore,
{
    fn open(&self, id: Option<SessionId>, now: DateTime<Utc>) -> (SessionId, bool) {
        (**self).open(id, now)
    }

    fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        (**self).with_session(id, f)
    }

    fn end(&self, id: SessionId) -> bool {
        (**self).end(id)
    }

    fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        (**self).prune_idle(now)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Process-memory session registry. Nothing survives a restart.
#[derive(Debug)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionId, Session>>,
    idle_ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn open(&self, id: Option<SessionId>, now: DateTime<Utc>) -> (SessionId, bool) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(id) = id {
            match map.get_mut(&id) {
                Some(session) if !session.is_idle(now, self.idle_ttl) => {
                    session.touch(now);
                    return (id, false);
                }
                Some(_) => {
                    tracing::debug!(session_id = %id, "session expired");
                    map.remove(&id);
                }
                None => {}
            }
        }

        let id = SessionId::new();
        map.insert(id, Session::start(id, now));
        tracing::info!(session_id = %id, sessions = map.len(), "session started");
        (id, true)
    }

    fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.get_mut(&id).map(f)
    }

    fn end(&self, id: SessionId) -> bool {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match map.remove(&id) {
            Some(session) => {
                tracing::info!(
                    session_id = %id,
                    age_secs = session.age(Utc::now()).num_seconds(),
                    "session ended"
                );
                true
            }
            None => false,
        }
    }

    fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = map.len();
        map.retain(|_id, session| !session.is_idle(now, self.idle_ttl));
        before - map.len()
    }

    fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TTL: Duration = Duration::from_secs(60);

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn after(secs: i64) -> DateTime<Utc> {
        t0() + chrono::Duration::seconds(secs)
    }

    fn items_of(store: &InMemorySessionStore, id: SessionId) -> Vec<String> {
        store
            .with_session(id, |s| s.inventory.items().to_vec())
            .unwrap()
    }

    #[test]
    fn open_without_id_starts_seeded_session() {
        let store = InMemorySessionStore::new(TTL);
        let (id, created) = store.open(None, t0());

        assert!(created);
        assert_eq!(store.len(), 1);
        assert_eq!(items_of(&store, id), vec!["Młotek", "Śrubokręt", "Wkręty M4"]);
    }

    #[test]
    fn open_with_live_id_reuses_session() {
        let store = InMemorySessionStore::new(TTL);
        let (id, _) = store.open(None, t0());
        store.with_session(id, |s| s.inventory.add("Piła")).unwrap().unwrap();

        let (again, created) = store.open(Some(id), after(30));
        assert_eq!(again, id);
        assert!(!created);
        assert_eq!(items_of(&store, id).last().map(String::as_str), Some("Piła"));
    }

    #[test]
    fn open_with_unknown_id_issues_new_one() {
        let store = InMemorySessionStore::new(TTL);
        let stale = SessionId::new();
        let (id, created) = store.open(Some(stale), t0());
        assert!(created);
        assert_ne!(id, stale);
    }

    #[test]
    fn expired_session_is_replaced() {
        let store = InMemorySessionStore::new(TTL);
        let (id, _) = store.open(None, t0());
        store.with_session(id, |s| s.inventory.add("Piła")).unwrap().unwrap();

        let (fresh, created) = store.open(Some(id), after(61));
        assert!(created);
        assert_ne!(fresh, id);
        assert_eq!(store.len(), 1);
        assert_eq!(items_of(&store, fresh).len(), 3);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = InMemorySessionStore::new(TTL);
        let (a, _) = store.open(None, t0());
        let (b, _) = store.open(None, t0());

        store.with_session(a, |s| s.inventory.remove("Młotek")).unwrap().unwrap();

        assert_eq!(items_of(&store, a), vec!["Śrubokręt", "Wkręty M4"]);
        assert_eq!(items_of(&store, b), vec!["Młotek", "Śrubokręt", "Wkręty M4"]);
    }

    #[test]
    fn end_drops_session() {
        let store = InMemorySessionStore::new(TTL);
        let (id, _) = store.open(None, t0());

        assert!(store.end(id));
        assert!(!store.end(id));
        assert!(store.with_session(id, |_| ()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn prune_only_drops_idle_sessions() {
        let store = InMemorySessionStore::new(TTL);
        let (old, _) = store.open(None, t0());
        let (recent, _) = store.open(None, after(50));

        assert_eq!(store.prune_idle(after(70)), 1);
        assert!(store.with_session(old, |_| ()).is_none());
        assert!(store.with_session(recent, |_| ()).is_some());
    }

    #[test]
    fn len_survives_poisoned_lock() {
        let store = Arc::new(InMemorySessionStore::new(TTL));
        store.open(None, t0());
        store.open(None, t0());

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the session map");
        })
        .join();

        assert!(store.inner.is_poisoned());
        assert_eq!(store.len(), 2);
        assert_eq!(store.prune_idle(after(30)), 0);
    }

    #[test]
    fn session_age_counts_from_start() {
        let session = Session::start(SessionId::new(), t0());
        assert_eq!(session.age(after(90)).num_seconds(), 90);
    }

    #[test]
    fn arc_store_forwards() {
        let store = Arc::new(InMemorySessionStore::new(TTL));
        let (id, created) = SessionStore::open(&store, None, t0());
        assert!(created);
        assert!(SessionStore::end(&store, id));
    }
}
