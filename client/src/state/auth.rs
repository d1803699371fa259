//! Auth-session context for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates exactly one `AuthContext` and provides it; the header, the
//! login page and any other descendant fetch it with `expect_context` to read
//! `logged_in` or call `login`/`logout`. Clones share the same session.
//!
//! The session handle is the source of truth; `logged_in` is its reactive
//! mirror and is refreshed after every mutation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use logingate::{LoginConfig, SessionHandle};

use crate::util::storage::LocalStorageMirror;

#[derive(Clone, Debug)]
pub struct AuthContext {
    session: SessionHandle<LocalStorageMirror>,
    logged_in: RwSignal<bool>,
}

impl AuthContext {
    /// Restore the flag from `localStorage` under the configured key.
    pub fn initialize(config: &LoginConfig) -> Self {
        let session = SessionHandle::initialize(LocalStorageMirror, config.session_key.clone());
        let logged_in = RwSignal::new(session.logged_in());
        Self { session, logged_in }
    }

    /// Reactive read of the flag.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    pub fn logged_in_signal(&self) -> ReadSignal<bool> {
        self.logged_in.read_only()
    }

    pub fn session(&self) -> &SessionHandle<LocalStorageMirror> {
        &self.session
    }

    pub fn login(&self, email: &str, password: &str) {
        if let Err(e) = self.session.login(email, password) {
            log::warn!("login not persisted: {e}");
        }
        self.refresh();
    }

    pub fn logout(&self) {
        if let Err(e) = self.session.logout() {
            log::warn!("logout not persisted: {e}");
        }
        self.refresh();
    }

    /// Re-publish the session flag after a mutation made through
    /// [`Self::session`].
    pub fn refresh(&self) {
        self.logged_in.set(self.session.logged_in());
    }
}
