use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    error::AppError,
    models::question::QuestionBank,
    sessions::SessionRegistry,
    store::RankingStore,
    views::Views,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bank: Arc<QuestionBank>,
    pub sessions: SessionRegistry,
    pub ranking: Arc<dyn RankingStore>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(
        config: Config,
        bank: QuestionBank,
        ranking: Arc<dyn RankingStore>,
    ) -> Result<Self, AppError> {
        let sessions = SessionRegistry::new(config.session_ttl);
        Ok(Self {
            config,
            bank: Arc::new(bank),
            sessions,
            ranking,
            views: Arc::new(Views::new()?),
        })
    }
}

impl FromRef<AppState> for Arc<QuestionBank> {
    fn from_ref(state: &AppState) -> Self {
        state.bank.clone()
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<dyn RankingStore> {
    fn from_ref(state: &AppState) -> Self {
        state.ranking.clone()
    }
}
