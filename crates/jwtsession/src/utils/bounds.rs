//! Saturating timestamp arithmetic

use std::time::Duration;

/// Apply leeway to a timestamp, saturating at the bounds of `i64`
///
/// An `exp` near `i64::MAX` therefore never expires and an `nbf` near
/// `i64::MIN` is always in force.
pub(crate) fn apply_leeway(timestamp: i64, leeway_seconds: u64, add: bool) -> i64 {
    let leeway = i64::try_from(leeway_seconds).unwrap_or(i64::MAX);
    if add {
        timestamp.saturating_add(leeway)
    } else {
        timestamp.saturating_sub(leeway)
    }
}

/// Add a duration to a Unix timestamp, saturating at `i64::MAX`
pub(crate) fn add_duration(timestamp: i64, duration: Duration) -> i64 {
    let seconds = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
    timestamp.saturating_add(seconds)
}
