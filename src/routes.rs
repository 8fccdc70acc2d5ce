// src/routes.rs

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{api, quiz},
    state::AppState,
    utils::session_cookie::session_middleware,
};

/// Assembles the main application router.
///
/// * Page routes (`/`, `/answer`, `/register`, `/restart`) render HTML.
/// * `/api` exposes read-only JSON.
/// * Every route sees the visitor's session cookie via `session_middleware`.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(quiz::start_quiz))
        .route("/answer", post(quiz::submit_answer))
        .route("/register", post(quiz::register_score))
        .route("/restart", post(quiz::restart_quiz));

    let api_routes = Router::new()
        .route("/questions", get(api::list_questions))
        .route("/ranking", get(api::get_ranking))
        .route("/session", get(api::get_session));

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(middleware::from_fn(session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
