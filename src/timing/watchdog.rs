// src/timing/watchdog.rs

use std::time::{Duration, Instant};

/// Single deferred deadline that any activity pushes back.
///
/// Arming (or touching) replaces the pending deadline. Once the deadline
/// passes, `poll` reports the firing exactly once; the watchdog then stays
/// fired until it is armed again.
#[derive(Debug, Clone)]
pub struct IdleWatchdog {
    timeout: Duration,
    state: WatchdogState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogState {
    Armed { deadline: Instant },
    Fired,
}

impl IdleWatchdog {
    /// Creates a watchdog already armed at `now`.
    pub fn armed(timeout: Duration, now: Instant) -> Self {
        Self {
            timeout,
            state: WatchdogState::Armed {
                deadline: now + timeout,
            },
        }
    }

    pub fn state(&self) -> WatchdogState {
        self.state
    }

    /// Cancels the pending deadline and starts a fresh window at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.state = WatchdogState::Armed {
            deadline: now + self.timeout,
        };
    }

    /// Returns `true` the first time it is polled at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            WatchdogState::Armed { deadline } if now >= deadline => {
                self.state = WatchdogState::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == WatchdogState::Fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(30);

    #[test]
    fn silence_fires_exactly_once() {
        let t0 = Instant::now();
        let mut dog = IdleWatchdog::armed(WINDOW, t0);

        assert!(!dog.poll(t0 + Duration::from_millis(29_999)));
        assert!(dog.poll(t0 + WINDOW));
        assert!(!dog.poll(t0 + WINDOW + Duration::from_secs(1)));
        assert!(!dog.poll(t0 + WINDOW * 10));
        assert!(dog.has_fired());
    }

    #[test]
    fn activity_at_29s_restarts_the_window() {
        let t0 = Instant::now();
        let mut dog = IdleWatchdog::armed(WINDOW, t0);

        dog.touch(t0 + Duration::from_secs(29));

        assert!(!dog.poll(t0 + WINDOW));
        assert!(!dog.poll(t0 + Duration::from_millis(58_999)));
        assert!(dog.poll(t0 + Duration::from_secs(59)));
    }

    #[test]
    fn touching_after_firing_rearms() {
        let t0 = Instant::now();
        let mut dog = IdleWatchdog::armed(WINDOW, t0);
        assert!(dog.poll(t0 + WINDOW));

        let later = t0 + WINDOW * 2;
        dog.touch(later);
        assert_eq!(
            dog.state(),
            WatchdogState::Armed {
                deadline: later + WINDOW
            }
        );
        assert!(dog.poll(later + WINDOW));
    }
}
