// src/store/memory.rs

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::ranking::{RankingEntry, SaveReceipt},
    store::RankingStore,
};

/// Placeholder ranking: always reads back the same seed rows and only
/// acknowledges writes.
#[derive(Debug, Clone)]
pub struct SeededRankingStore {
    seed: Vec<RankingEntry>,
}

impl SeededRankingStore {
    pub fn new() -> Self {
        Self::with_seed(vec![
            RankingEntry {
                name: "GuestA".to_string(),
                score: 3,
                time_taken_seconds: 12.5,
            },
            RankingEntry {
                name: "GuestB".to_string(),
                score: 2,
                time_taken_seconds: 15.0,
            },
        ])
    }

    pub fn with_seed(seed: Vec<RankingEntry>) -> Self {
        Self { seed }
    }
}

impl Default for SeededRankingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RankingStore for SeededRankingStore {
    async fn load(&self) -> Result<Vec<RankingEntry>, AppError> {
        Ok(self.seed.clone())
    }

    async fn save(&self, entry: &RankingEntry) -> Result<SaveReceipt, AppError> {
        // Nothing is persisted yet; the record only reaches the log.
        tracing::info!(
            name = %entry.name,
            score = entry.score,
            time_taken_seconds = entry.time_taken_seconds,
            "Ranking entry received"
        );

        Ok(SaveReceipt {
            message: format!(
                "Provisionally registered {}'s record ({} correct / {:.1} s)!",
                entry.name, entry.score, entry.time_taken_seconds
            ),
        })
    }
}
