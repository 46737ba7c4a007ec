use crate::{CoreError, CoreResult, EventChannel};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::broadcast;
use tracing::trace;

/// Default number of undelivered events a listener may fall behind by.
pub const DEFAULT_BUS_CAPACITY: usize = 256;

/// In-process publish/subscribe hub for backend events.
///
/// Cloning is cheap; all clones publish to the same listeners.
#[derive(Debug, Clone)]
pub struct EventBus {
    partial_transcript: broadcast::Sender<String>,
    recording_error: broadcast::Sender<String>,
}

impl EventBus {
    /// Create a bus whose listeners buffer up to `capacity` events each.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (partial_transcript, _) = broadcast::channel(capacity);
        let (recording_error, _) = broadcast::channel(capacity);

        Self {
            partial_transcript,
            recording_error,
        }
    }

    /// Publish `payload` to every current listener of `channel`.
    ///
    /// Returns the number of listeners reached.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoListeners`] when nobody is subscribed.
    #[track_caller]
    pub fn emit(&self, channel: EventChannel, payload: impl Into<String>) -> CoreResult<usize> {
        let delivered = self
            .sender(channel)
            .send(payload.into())
            .map_err(|_| CoreError::NoListeners {
                channel,
                location: ErrorLocation::from(Location::caller()),
            })?;

        trace!(channel = %channel, delivered, "Event published");

        Ok(delivered)
    }

    /// Subscribe to `channel`. Only events published after this call are seen.
    pub fn listen(&self, channel: EventChannel) -> broadcast::Receiver<String> {
        self.sender(channel).subscribe()
    }

    /// Number of live listeners on `channel`.
    pub fn listener_count(&self, channel: EventChannel) -> usize {
        self.sender(channel).receiver_count()
    }

    fn sender(&self, channel: EventChannel) -> &broadcast::Sender<String> {
        match channel {
            EventChannel::PartialTranscript => &self.partial_transcript,
            EventChannel::RecordingError => &self.recording_error,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_BUS_CAPACITY)
    }
}
