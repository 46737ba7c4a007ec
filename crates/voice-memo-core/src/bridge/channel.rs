use crate::ControllerMessage;

use std::fmt;

/// Name of the channel carrying partial transcript fragments.
pub const PARTIAL_TRANSCRIPT: &str = "partial-transcript";
/// Name of the channel carrying fatal recording errors.
pub const RECORDING_ERROR: &str = "recording-error";

/// Out-of-band event channels published by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventChannel {
    /// Fragments of recognized speech, in production order.
    PartialTranscript,
    /// Fatal failures outside the command/response pattern.
    RecordingError,
}

impl EventChannel {
    /// Every channel the bridge subscribes to.
    pub const ALL: [EventChannel; 2] = [EventChannel::PartialTranscript, EventChannel::RecordingError];

    /// Wire name of the channel.
    pub fn name(self) -> &'static str {
        match self {
            EventChannel::PartialTranscript => PARTIAL_TRANSCRIPT,
            EventChannel::RecordingError => RECORDING_ERROR,
        }
    }

    /// Controller update for one payload received on this channel.
    pub fn into_message(self, payload: String) -> ControllerMessage {
        match self {
            EventChannel::PartialTranscript => ControllerMessage::PartialTranscript(payload),
            EventChannel::RecordingError => ControllerMessage::RecordingError(payload),
        }
    }
}

impl fmt::Display for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
