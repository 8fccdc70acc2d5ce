// src/utils/session_cookie.rs

use axum::{
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::config::SESSION_COOKIE;

/// Session id presented by the browser, if any.
///
/// The id is only syntactically checked here; handlers decide whether it
/// still maps to a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionCookie(pub Option<Uuid>);

/// Axum Middleware: Session cookie.
///
/// Reads the `quiz_session` cookie and injects a `SessionCookie` into the
/// request extensions. Never rejects a request: a missing or malformed
/// cookie just means the visitor has no session yet.
pub async fn session_middleware(mut req: Request<Body>, next: Next) -> Response {
    let id = req
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(parse_session_id);

    req.extensions_mut().insert(SessionCookie(id));
    next.run(req).await
}

/// Extracts the session id from a `Cookie:` header value.
pub fn parse_session_id(cookie_header: &str) -> Option<Uuid> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to `id`. Lives for the browser session only.
pub fn session_cookie_header(id: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
