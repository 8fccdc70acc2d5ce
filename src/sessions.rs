// src/sessions.rs

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use tokio::{sync::RwLock, task::JoinHandle};
use uuid::Uuid;

use crate::{models::session::SessionState, timing::IdleWatchdog};

#[derive(Debug)]
struct TrackedSession {
    state: SessionState,
    idle: IdleWatchdog,
}

/// Per-visitor session table.
///
/// Each visitor only ever reaches the entry keyed by their own cookie id.
/// Entries nobody has touched for `ttl` are dropped by `sweep`.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<Uuid, TrackedSession>>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a fresh session starting at `now`.
    pub async fn start(&self, now: DateTime<Utc>) -> (Uuid, SessionState) {
        let id = Uuid::new_v4();
        let state = SessionState::new(now);

        self.inner.write().await.insert(
            id,
            TrackedSession {
                state: state.clone(),
                idle: IdleWatchdog::armed(self.ttl, Instant::now()),
            },
        );
        tracing::debug!(session = %id, "Session started");

        (id, state)
    }

    /// Drops a session. Returns whether it existed.
    pub async fn discard(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Runs `f` against the session, counting the call as visitor activity.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        let mut sessions = self.inner.write().await;
        let tracked = sessions.get_mut(&id)?;
        tracked.idle.touch(Instant::now());
        Some(f(&mut tracked.state))
    }

    /// Returns a copy of the session without counting as activity.
    pub async fn snapshot(&self, id: Uuid) -> Option<SessionState> {
        self.inner
            .read()
            .await
            .get(&id)
            .map(|tracked| tracked.state.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Evicts every session whose idle window has run out by `now`.
    pub async fn sweep(&self, now: Instant) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, tracked| !tracked.idle.poll(now));
        before - sessions.len()
    }

    /// Spawns the background task that periodically evicts idle sessions.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = registry.sweep(Instant::now()).await;
                if evicted > 0 {
                    tracing::info!("Evicted {} idle session(s)", evicted);
                }
            }
        })
    }
}
