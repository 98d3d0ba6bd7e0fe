//! Local session gate.
//!
//! The session flag is a UI gate, not a trust boundary: nothing here talks to
//! the backend. Sign-in and sign-out are synchronous and total; they return
//! the new [`Session`] so callers can sequence navigation after the change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::store::Store;

/// Durable key holding the flag.
pub const SESSION_STORAGE_KEY: &str = "auth";
const AUTHENTICATED_VALUE: &str = "true";

/// Injected key/value persistence (`localStorage` in the browser).
pub trait SessionPersistence {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
}

/// Sole owner of the [`Session`] for one client instance.
pub struct SessionStore<P> {
    persistence: P,
    session: Store<Session>,
}

impl<P: SessionPersistence> SessionStore<P> {
    /// Build the store from whatever was persisted. Absent means signed out.
    pub fn restore(persistence: P) -> Self {
        let authenticated = persistence.read(SESSION_STORAGE_KEY).as_deref() == Some(AUTHENTICATED_VALUE);
        Self { persistence, session: Store::new(Session { authenticated }) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.authenticated)
    }

    /// Observable handle on the session, for views.
    pub fn session(&self) -> Store<Session> {
        self.session.clone()
    }

    pub fn sign_in(&self) -> Session {
        self.session.set(Session { authenticated: true });
        self.persistence.write(SESSION_STORAGE_KEY, AUTHENTICATED_VALUE);
        log::info!("session signed in");
        self.session.get()
    }

    pub fn sign_out(&self) -> Session {
        self.session.set(Session { authenticated: false });
        self.persistence.clear(SESSION_STORAGE_KEY);
        log::info!("session signed out");
        self.session.get()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}
