mod handlers;
mod middleware;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::session::{MemorySessionStore, SessionStore};

/// Shared state handed to the router and the session middleware.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionStore>, config: AppConfig) -> Self {
        Self {
            sessions,
            config: Arc::new(config),
        }
    }

    /// State backed by an in-memory store using the configured session TTL.
    pub fn in_memory(config: AppConfig) -> Self {
        let store = MemorySessionStore::new(config.session_ttl);
        Self::new(Arc::new(store), config)
    }
}

pub fn create_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(handlers::root))
        // Lists
        .route("/lists", get(handlers::list_lists))
        .route("/lists", post(handlers::create_list))
        .route("/lists/new", get(handlers::new_list))
        .route("/lists/{id}", get(handlers::show_list))
        .route("/lists/{id}", post(handlers::update_list))
        .route("/lists/{id}/edit", get(handlers::edit_list))
        .route("/lists/{id}/destroy", post(handlers::delete_list))
        .route("/lists/{id}/complete_all", post(handlers::complete_all))
        // Todos
        .route("/lists/{id}/todos", post(handlers::create_todo))
        .route("/lists/{id}/todos/{index}", post(handlers::update_todo))
        .route("/lists/{id}/todos/{index}/destroy", post(handlers::delete_todo))
        .route_layer(from_fn_with_state(state.clone(), middleware::session_middleware));

    Router::new()
        .merge(pages)
        // Health (no session)
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
