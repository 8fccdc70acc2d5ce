// src/handlers/api.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::Serialize;

use crate::{
    error::AppError,
    models::{question::QuestionBank, ranking::RankingEntry, session::Phase},
    sessions::SessionRegistry,
    store::RankingStore,
    utils::session_cookie::SessionCookie,
};

/// Read-only view of the caller's session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub current_index: usize,
    pub total_questions: usize,
    pub score: u32,
    pub finished: bool,
    pub elapsed_seconds: u64,
    pub registered: Option<RankingEntry>,
}

/// Lists the question bank without answers.
pub async fn list_questions(State(bank): State<Arc<QuestionBank>>) -> impl IntoResponse {
    Json(bank.public_questions())
}

/// Returns the current ranking rows.
pub async fn get_ranking(
    State(ranking): State<Arc<dyn RankingStore>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = ranking.load().await?;
    Ok(Json(rows))
}

/// Returns the caller's session, or 404 when the cookie maps to none.
pub async fn get_session(
    State(sessions): State<SessionRegistry>,
    State(bank): State<Arc<QuestionBank>>,
    Extension(cookie): Extension<SessionCookie>,
) -> Result<impl IntoResponse, AppError> {
    let id = cookie
        .0
        .ok_or(AppError::NotFound("No session".to_string()))?;

    let session = sessions
        .snapshot(id)
        .await
        .ok_or(AppError::NotFound("Session not found".to_string()))?;

    Ok(Json(SessionSnapshot {
        phase: session.phase(),
        current_index: session.current_index,
        total_questions: bank.len(),
        score: session.score,
        finished: session.finished,
        elapsed_seconds: session.elapsed(Utc::now()).as_secs(),
        registered: session.registered,
    }))
}
