// src/timing/clock.rs

use std::time::Duration;

/// Formats an elapsed duration as a zero-padded `MM:SS` stopwatch label.
///
/// Partial seconds are floored. Minutes are not wrapped into hours, so a
/// run longer than 99 minutes simply grows a third digit.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Converts a signed chrono delta into a `Duration`, clamping clock skew to zero.
pub fn non_negative(delta: chrono::TimeDelta) -> Duration {
    delta.to_std().unwrap_or(Duration::ZERO)
}
