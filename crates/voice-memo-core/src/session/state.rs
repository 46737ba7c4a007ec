use std::{future, time::Duration};

use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::debug;
use uuid::Uuid;

/// Recurring elapsed-time ticker for one recording.
///
/// Owned by [`SessionState::Recording`]; it exists exactly as long as the
/// session is recording.
#[derive(Debug)]
pub(crate) struct Ticker {
    started_at: Instant,
    interval: Interval,
}

impl Ticker {
    /// Start ticking every `period`, anchored at the current instant.
    ///
    /// The first tick fires immediately.
    pub(crate) fn start(period: Duration) -> Self {
        let started_at = Instant::now();
        let mut interval = tokio::time::interval_at(started_at, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            started_at,
            interval,
        }
    }

    pub(crate) fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Wait for the next tick and return the instant it fired at.
    pub(crate) async fn tick(&mut self) -> Instant {
        self.interval.tick().await
    }

    /// Stop ticking. Consumes the handle, so it can only happen once.
    pub(crate) fn cancel(self, session_id: Uuid) {
        debug!(
            session_id = %session_id,
            ran_for_ms = self.started_at.elapsed().as_millis(),
            "Elapsed ticker cancelled"
        );
    }
}

/// Recording state of the session.
#[derive(Debug, Default)]
pub(crate) enum SessionState {
    /// Not currently recording.
    #[default]
    Idle,
    /// Currently recording audio.
    Recording {
        /// Unique session ID for log correlation.
        session_id: Uuid,
        /// Drives the elapsed readout.
        ticker: Ticker,
    },
}

impl SessionState {
    pub(crate) fn is_recording(&self) -> bool {
        matches!(self, SessionState::Recording { .. })
    }

    /// Resolves on the next tick while recording; never resolves while idle.
    pub(crate) async fn next_tick(&mut self) -> Instant {
        match self {
            SessionState::Recording { ticker, .. } => ticker.tick().await,
            SessionState::Idle => future::pending().await,
        }
    }
}
