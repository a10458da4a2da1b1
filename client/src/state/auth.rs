//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`AuthHandle`] and provides it as context. Components
//! read [`AuthHandle::state`] reactively; every mutation goes through the
//! wrapped `AuthContext` (and so through session storage) and then
//! republishes its snapshot into the signal.

use busline::net::error::ApiError;
use busline::net::types::{LoginResponse, User, UserPatch};
use busline::session::StorageError;
use busline::state::auth::AuthError;
use busline::{AuthContext, AuthState, SessionStore};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthHandle {
    state: RwSignal<AuthState>,
    ctx: StoredValue<AuthContext<BrowserStorage>>,
}

impl Default for AuthHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthHandle {
    /// Handle in the hydrating phase; call [`hydrate`](Self::hydrate) once
    /// the app has mounted.
    pub fn new() -> Self {
        let ctx = AuthContext::new(SessionStore::new(BrowserStorage));
        Self { state: RwSignal::new(ctx.snapshot()), ctx: StoredValue::new(ctx) }
    }

    pub fn state(self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Run `f` against the core context and republish its snapshot.
    /// `None` once the owning scope has been disposed.
    fn mutate<R>(self, f: impl FnOnce(&mut AuthContext<BrowserStorage>) -> R) -> Option<R> {
        let out = self.ctx.try_update_value(f);
        if let Some(snapshot) = self.ctx.try_with_value(AuthContext::snapshot) {
            self.state.set(snapshot);
        }
        out
    }

    pub fn hydrate(self) {
        self.mutate(AuthContext::hydrate);
    }

    /// Start a session from a login response.
    ///
    /// # Errors
    ///
    /// The core's `AuthError`; a disposed handle reports `NoSession`.
    pub fn login(self, response: LoginResponse) -> Result<(), AuthError> {
        self.mutate(|ctx| ctx.apply_login(response)).unwrap_or(Err(AuthError::NoSession))
    }

    /// # Errors
    ///
    /// Session storage could not be cleared; memory is cleared regardless.
    pub fn logout(self) -> Result<(), StorageError> {
        self.mutate(AuthContext::logout).unwrap_or(Ok(()))
    }

    /// # Errors
    ///
    /// `NoSession` when signed out or disposed; `Storage` on write failure.
    pub fn update_user(self, patch: UserPatch) -> Result<User, AuthError> {
        self.mutate(|ctx| ctx.update_user(patch)).unwrap_or(Err(AuthError::NoSession))
    }

    /// Ends the session on a rejected token. Returns `true` when it did.
    pub fn handle_api_error(self, error: &ApiError) -> bool {
        self.mutate(|ctx| ctx.handle_api_error(error)).unwrap_or(false)
    }

    /// Current bearer token, read without tracking.
    pub fn token(self) -> Option<String> {
        self.ctx.try_with_value(|ctx| ctx.token().map(str::to_owned)).flatten()
    }

    /// Current user id, read without tracking.
    pub fn user_id(self) -> Option<String> {
        self.ctx.try_with_value(|ctx| ctx.user().map(|user| user.id.clone())).flatten()
    }
}

/// The app-wide auth handle.
pub fn use_auth() -> AuthHandle {
    expect_context::<AuthHandle>()
}
