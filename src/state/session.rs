//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the one owner of the live `Session`. It is provided via
//! Leptos context; the navbar and guarded routes subscribe to it, the login
//! initiator and the explicit logout action are its only writers.
//!
//! DESIGN
//! ======
//! `is_authenticated` is derived from the token, never stored next to it, so
//! the two cannot disagree. Observers are invoked after the lock is released
//! and each is handed the session as it stands when its turn comes, so an
//! observer that re-enters the store never leaves later observers stale.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Opaque bearer credential issued by the backend.
///
/// Never empty. `Debug` output is redacted so tokens stay out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token, rejecting the empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Snapshot of the client-held authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<BearerToken>,
}

impl Session {
    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

type Observer = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct Shared {
    session: Session,
    observers: Vec<(u64, Observer)>,
    next_id: u64,
}

impl Shared {
    fn observers(&self) -> Vec<Observer> {
        self.observers.iter().map(|(_, observer)| Arc::clone(observer)).collect()
    }
}

/// Single owner of the live `Session`, with change notification.
///
/// Cloning yields another handle to the same store.
#[derive(Clone, Default)]
pub struct SessionStore {
    shared: Arc<Mutex<Shared>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `token` as the current credential and notify observers.
    pub fn login(&self, token: BearerToken) {
        let observers = {
            let mut shared = self.lock();
            shared.session.token = Some(token);
            shared.observers()
        };
        log::info!("session authenticated");
        self.notify(&observers);
    }

    /// Clear the credential. A no-op when already logged out.
    pub fn logout(&self) {
        let observers = {
            let mut shared = self.lock();
            if shared.session.token.take().is_none() {
                return;
            }
            shared.observers()
        };
        log::info!("session cleared");
        self.notify(&observers);
    }

    pub fn read(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().session.is_authenticated()
    }

    pub fn token(&self) -> Option<BearerToken> {
        self.lock().session.token.clone()
    }

    /// Register `observer` to run after every session change.
    ///
    /// The observer stays registered until the returned `Subscription` drops.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let mut shared = self.lock();
        let id = shared.next_id;
        shared.next_id += 1;
        shared.observers.push((id, Arc::new(observer)));
        Subscription { shared: Arc::downgrade(&self.shared), id }
    }

    // Re-read per observer: an earlier observer may have changed the session.
    fn notify(&self, observers: &[Observer]) {
        for observer in observers {
            let snapshot = self.read();
            observer(&snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.lock();
        f.debug_struct("SessionStore")
            .field("session", &shared.session)
            .field("observers", &shared.observers.len())
            .finish()
    }
}

/// Observer registration handle; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    shared: Weak<Mutex<Shared>>,
    id: u64,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
        shared.observers.retain(|(id, _)| *id != self.id);
    }
}
