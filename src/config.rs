// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use dotenvy::dotenv;

/// Longest nickname accepted on the ranking, counted in characters.
pub const NICKNAME_MAX_CHARS: usize = 6;

/// Name of the cookie carrying the visitor's session id.
pub const SESSION_COOKIE: &str = "quiz_session";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub quiz_title: String,
    /// Optional JSON file replacing the built-in question bank.
    pub questions_path: Option<PathBuf>,
    /// Idle window on the results screen before the page resets itself.
    pub idle_reset: Duration,
    /// Refresh period of the on-page stopwatch.
    pub clock_tick: Duration,
    /// Sessions without any request for this long are evicted.
    pub session_ttl: Duration,
    pub session_sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            quiz_title: "Festival Original Quiz".to_string(),
            questions_path: None,
            idle_reset: Duration::from_millis(30_000),
            clock_tick: Duration::from_millis(1_000),
            session_ttl: Duration::from_secs(30 * 60),
            session_sweep_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let bind_addr = parse_var("BIND_ADDR", defaults.bind_addr);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let quiz_title = env::var("QUIZ_TITLE").unwrap_or(defaults.quiz_title);

        let questions_path = env::var("QUESTIONS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let idle_reset = Duration::from_millis(period_var("IDLE_RESET_MS", 30_000));
        let clock_tick = Duration::from_millis(period_var("CLOCK_TICK_MS", 1_000));
        let session_ttl = Duration::from_secs(period_var("SESSION_TTL_SECS", 30 * 60));
        let session_sweep_interval = Duration::from_secs(period_var("SESSION_SWEEP_SECS", 60));

        Self {
            bind_addr,
            rust_log,
            log_dir,
            quiz_title,
            questions_path,
            idle_reset,
            clock_tick,
            session_ttl,
            session_sweep_interval,
        }
    }
}

/// Reads `key` from the environment, keeping `default` when it is unset or unparseable.
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    parse_setting(key, env::var(key).ok(), default)
}

/// Like `parse_var`, for timer periods. Zero would stop timers from ever
/// waiting, so it is refused like any other invalid value.
fn period_var(key: &str, default: u64) -> u64 {
    parse_period(key, env::var(key).ok(), default)
}

fn parse_setting<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_period(key: &str, raw: Option<String>, default: u64) -> u64 {
    match parse_setting(key, raw, default) {
        0 => {
            tracing::warn!("Ignoring {}=0, using {}", key, default);
            default
        }
        value => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_kiosk_timings() {
        let config = Config::default();
        assert_eq!(config.idle_reset, Duration::from_secs(30));
        assert_eq!(config.clock_tick, Duration::from_secs(1));
        assert!(config.questions_path.is_none());
    }

    #[test]
    fn parse_setting_falls_back_on_garbage() {
        let raw = |s: &str| Some(s.to_string());

        assert_eq!(parse_setting("N", raw("not-a-number"), 42u64), 42);
        assert_eq!(parse_setting("N", raw(" 7 "), 42u64), 7);
        assert_eq!(parse_setting("N", None, 42u64), 42);
        assert_eq!(
            parse_setting("BIND_ADDR", raw("127.0.0.1:8080"), Config::default().bind_addr),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
    }

    #[test]
    fn zero_periods_keep_the_default() {
        let raw = |s: &str| Some(s.to_string());

        assert_eq!(parse_period("SESSION_SWEEP_SECS", raw("0"), 60), 60);
        assert_eq!(parse_period("IDLE_RESET_MS", raw(" 0 "), 30_000), 30_000);
        assert_eq!(parse_period("CLOCK_TICK_MS", raw("250"), 1_000), 250);
        assert_eq!(parse_period("CLOCK_TICK_MS", raw("-5"), 1_000), 1_000);
        assert_eq!(parse_period("CLOCK_TICK_MS", None, 1_000), 1_000);
    }
}
