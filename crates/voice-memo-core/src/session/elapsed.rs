use std::time::Duration;

use tokio::time::Instant;

/// Elapsed readout shown while idle.
pub const ZERO_ELAPSED: &str = "00:00";

/// Format a duration as zero-padded `MM:SS`.
///
/// Minutes are not wrapped at 60: an hour and a minute reads `61:01`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Elapsed readout for a tick at `now` of a recording that began at
/// `started_at`.
///
/// Always derived from the start timestamp, so late or skipped ticks never
/// accumulate error. A `now` earlier than `started_at` reads `00:00`.
pub fn elapsed_display(started_at: Instant, now: Instant) -> String {
    format_elapsed(now.saturating_duration_since(started_at))
}
