// src/handlers/quiz.rs

use axum::{
    Extension, Form,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        ranking::{RankingEntry, RegisterForm},
        session::SessionState,
    },
    state::AppState,
    utils::session_cookie::{SessionCookie, session_cookie_header},
    views::{PageExtras, PageView},
};

/// Form posted by an option button.
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    /// Index of the question the page was showing.
    pub question: usize,
    /// Index of the chosen option within that question.
    pub option: usize,
}

/// Result of trying to claim the ranking slot of a session.
enum Registration {
    NotFinished(SessionState),
    AlreadyRegistered(SessionState),
    Rejected(SessionState, String),
    Accepted(SessionState, RankingEntry),
}

/// Renders the page for `session`, optionally binding the browser to a new session id.
fn render_page(
    state: &AppState,
    session: &SessionState,
    extras: PageExtras,
    new_session: Option<Uuid>,
) -> Result<Response, AppError> {
    let view = PageView::project(&state.config, &state.bank, session, Utc::now(), extras);
    let body = state.views.render(&view)?;

    let no_store = [(header::CACHE_CONTROL, "no-store")];
    Ok(match new_session {
        Some(id) => (
            no_store,
            [(header::SET_COOKIE, session_cookie_header(id))],
            Html(body),
        )
            .into_response(),
        None => (no_store, Html(body)).into_response(),
    })
}

/// Opens a brand-new session and shows the first question.
async fn fresh_start(state: &AppState) -> Result<Response, AppError> {
    let (id, session) = state.sessions.start(Utc::now()).await;
    render_page(state, &session, PageExtras::default(), Some(id))
}

/// Entry point. Every visit (and every reload) starts the quiz over.
pub async fn start_quiz(
    State(state): State<AppState>,
    Extension(cookie): Extension<SessionCookie>,
) -> Result<Response, AppError> {
    if let Some(previous) = cookie.0 {
        if state.sessions.discard(previous).await {
            tracing::debug!(session = %previous, "Previous session discarded on reload");
        }
    }

    fresh_start(&state).await
}

/// Records the chosen option for the current question.
///
/// * Stale submissions (question index no longer current) are ignored.
/// * An option index outside the rendered choices is rejected with 400.
pub async fn submit_answer(
    State(state): State<AppState>,
    Extension(cookie): Extension<SessionCookie>,
    Form(form): Form<AnswerForm>,
) -> Result<Response, AppError> {
    let Some(id) = cookie.0 else {
        return fresh_start(&state).await;
    };

    let bank = state.bank.clone();
    let outcome = state
        .sessions
        .update(id, |session| -> Result<(Option<bool>, SessionState), AppError> {
            if session.finished || form.question != session.current_index {
                return Ok((None, session.clone()));
            }

            let selected = bank
                .get(session.current_index)
                .and_then(|q| q.options.get(form.option))
                .cloned()
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Option {} does not exist for question {}",
                        form.option,
                        form.question + 1
                    ))
                })?;

            let correct = session.advance(&bank, &selected);
            Ok((correct, session.clone()))
        })
        .await;

    match outcome {
        None => {
            tracing::warn!(session = %id, "Answer for unknown session, starting over");
            fresh_start(&state).await
        }
        Some(Err(e)) => Err(e),
        Some(Ok((correct, session))) => {
            match correct {
                Some(correct) => tracing::info!(
                    session = %id,
                    question = form.question + 1,
                    correct,
                    score = session.score,
                    "Answer recorded"
                ),
                None => tracing::debug!(session = %id, "Ignoring stale answer"),
            }
            render_page(&state, &session, PageExtras::default(), None)
        }
    }
}

/// Puts the finished session on the ranking and shows the ranking table.
///
/// * Empty or overlong nicknames produce a warning and change nothing.
/// * A session registers at most once; repeats only show the ranking again.
pub async fn register_score(
    State(state): State<AppState>,
    Extension(cookie): Extension<SessionCookie>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let Some(id) = cookie.0 else {
        return fresh_start(&state).await;
    };

    let form = form.normalized();
    let claim = state
        .sessions
        .update(id, |session| {
            if !session.finished {
                return Registration::NotFinished(session.clone());
            }
            if session.registered.is_some() {
                return Registration::AlreadyRegistered(session.clone());
            }
            if let Some(warning) = form.warning() {
                return Registration::Rejected(session.clone(), warning);
            }

            let entry = RankingEntry {
                name: form.name.clone(),
                score: session.score,
                time_taken_seconds: session.time_taken_seconds(Utc::now()),
            };
            session.registered = Some(entry.clone());
            Registration::Accepted(session.clone(), entry)
        })
        .await;

    let Some(claim) = claim else {
        tracing::warn!(session = %id, "Registration for unknown session, starting over");
        return fresh_start(&state).await;
    };

    match claim {
        Registration::NotFinished(session) => {
            render_page(&state, &session, PageExtras::default(), None)
        }
        Registration::Rejected(session, warning) => {
            render_page(&state, &session, PageExtras::warning(warning, form.name), None)
        }
        Registration::AlreadyRegistered(session) => {
            let rows = state.ranking.load().await?;
            render_page(&state, &session, PageExtras::ranking(rows, None), None)
        }
        Registration::Accepted(session, entry) => {
            let receipt = match state.ranking.save(&entry).await {
                Ok(receipt) => receipt,
                Err(e) => {
                    // Give the player another try.
                    state.sessions.update(id, |s| s.registered = None).await;
                    return Err(e);
                }
            };
            tracing::info!(
                session = %id,
                name = %entry.name,
                score = entry.score,
                "Score registered"
            );

            let rows = state.ranking.load().await?;
            render_page(
                &state,
                &session,
                PageExtras::ranking(rows, Some(receipt.message)),
                None,
            )
        }
    }
}

/// Clears a finished session and starts the quiz again under the same id.
pub async fn restart_quiz(
    State(state): State<AppState>,
    Extension(cookie): Extension<SessionCookie>,
) -> Result<Response, AppError> {
    let Some(id) = cookie.0 else {
        return fresh_start(&state).await;
    };

    let outcome = state
        .sessions
        .update(id, |session| {
            let restarted = session.finished;
            if restarted {
                session.restart(Utc::now());
            }
            (restarted, session.clone())
        })
        .await;

    match outcome {
        Some((restarted, session)) => {
            if restarted {
                tracing::info!(session = %id, "Quiz restarted");
            }
            render_page(&state, &session, PageExtras::default(), None)
        }
        None => fresh_start(&state).await,
    }
}
