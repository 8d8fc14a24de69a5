//! Per-browser session state.
//!
//! A session holds the user's lists plus two one-shot flash slots. The
//! [`SessionStore`] trait is the only thing the rest of the crate knows about
//! persistence; [`MemorySessionStore`] keeps everything in process memory.
//!
//! During a request the session lives in a [`SessionContext`], which the
//! session middleware loads before the handler runs and saves afterwards.

mod memory;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todos_core::TodoLists;
use uuid::Uuid;

pub use memory::MemorySessionStore;

/// Opaque identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Error)]
#[error("invalid session id")]
pub struct InvalidSessionId(#[from] uuid::Error);

impl FromStr for SessionId {
    type Err = InvalidSessionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Flash messages taken out of a session for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Everything stored for one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub lists: TodoLists,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl SessionData {
    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn flash_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    /// Read and clear both flash slots.
    pub fn take_flash(&mut self) -> Flash {
        Flash {
            error: self.error.take(),
            success: self.success.take(),
        }
    }
}

/// Storage backend for sessions.
pub trait SessionStore: Send + Sync + 'static {
    /// Fetch a live session, or `None` if it does not exist or has expired.
    fn load(&self, id: &SessionId) -> Option<SessionData>;

    /// Insert or replace a session.
    fn save(&self, id: SessionId, data: SessionData);
}

/// Request-scoped handle to the current session's data.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    data: Arc<Mutex<SessionData>>,
}

impl SessionContext {
    pub fn new(data: SessionData) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Run `f` with exclusive access to the session data.
    pub fn with<R>(&self, f: impl FnOnce(&mut SessionData) -> R) -> R {
        let mut data = self.data.lock().expect("session lock poisoned");
        f(&mut data)
    }

    pub fn snapshot(&self) -> SessionData {
        self.with(|data| data.clone())
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<SessionContext>().cloned().ok_or_else(|| {
            tracing::error!("Session middleware is not installed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Session unavailable")
        })
    }
}
