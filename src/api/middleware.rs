//! Session cookie middleware.
//!
//! Loads the session named by the request's cookie (or starts a fresh one),
//! exposes it to handlers as a [`SessionContext`] request extension, and saves
//! it back to the store once the handler has produced a response.
//!
//! A fresh session that the handler left empty is discarded without a cookie,
//! so clients that never store anything cost no server memory.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use super::AppState;
use crate::config::AppConfig;
use crate::session::{SessionContext, SessionData, SessionId};

pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let existing = session_id_from_headers(request.headers(), &state.config.cookie_name)
        .and_then(|id| state.sessions.load(&id).map(|data| (id, data)));

    let (id, data, is_new) = match existing {
        Some((id, data)) => (id, data, false),
        None => (SessionId::new(), SessionData::default(), true),
    };

    let context = SessionContext::new(data);
    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;

    let data = context.snapshot();
    if is_new && data == SessionData::default() {
        return response;
    }

    state.sessions.save(id, data);

    if is_new {
        tracing::debug!(session = %id, "Starting new session");
        match HeaderValue::from_str(&session_cookie(&state.config, id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Invalid session cookie header: {}", e),
        }
    }

    response
}

/// Find the session id in the `Cookie` headers.
///
/// Cookies with the right name but an unparseable value are skipped.
fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == cookie_name)
        .find_map(|(_, value)| value.trim().parse().ok())
}

fn session_cookie(config: &AppConfig, id: SessionId) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        config.cookie_name, id
    );
    if config.secure_cookies {
        cookie.push_str("; Secure");
    }
    cookie
}
