// src/store/mod.rs

pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::ranking::{RankingEntry, SaveReceipt},
};

pub use memory::SeededRankingStore;

/// Read/write boundary for recorded results.
///
/// Handlers only talk to this trait, so a durable backend (spreadsheet,
/// database) can replace the in-memory default without touching them.
#[async_trait]
pub trait RankingStore: Send + Sync {
    /// Returns the ranking rows in display order.
    async fn load(&self) -> Result<Vec<RankingEntry>, AppError>;

    /// Records a result and returns a confirmation to show the player.
    async fn save(&self, entry: &RankingEntry) -> Result<SaveReceipt, AppError>;
}
