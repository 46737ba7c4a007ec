use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured failure returned by a recording command.
///
/// Serializes as an externally tagged enum, e.g.
/// `{"PlayStream":{"message":"device busy"}}`, which is the shape the
/// backend puts on the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandError {
    /// The audio device failed to open or start.
    #[error("failed to play stream: {message}")]
    PlayStream {
        /// Backend-provided description.
        message: String,
    },

    /// The backend failed to stop the audio stream.
    #[error("failed to stop stream: {message}")]
    StopStream {
        /// Backend-provided description.
        message: String,
    },

    /// Encoding the captured audio failed.
    #[error("failed to encode audio: {message}")]
    Hound {
        /// Backend-provided description.
        message: String,
    },

    /// Producing a transcript from the encoded audio failed.
    #[error("failed to transcribe audio: {message}")]
    Transcript {
        /// Backend-provided description.
        message: String,
    },

    /// A read or write on the backend's audio ring buffer failed.
    #[error("failed ring buffer chunk operation: {message}")]
    RtrbChunk {
        /// Backend-provided description.
        message: String,
    },

    /// The command never reached the backend, or its reply was lost.
    #[error("failed to reach backend: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
}

impl CommandError {
    /// Short name of the failure kind, matching the wire tag.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::PlayStream { .. } => "PlayStream",
            CommandError::StopStream { .. } => "StopStream",
            CommandError::Hound { .. } => "Hound",
            CommandError::Transcript { .. } => "Transcript",
            CommandError::RtrbChunk { .. } => "RtrbChunk",
            CommandError::Transport { .. } => "Transport",
        }
    }

    /// The nested backend message.
    pub fn message(&self) -> &str {
        match self {
            CommandError::PlayStream { message }
            | CommandError::StopStream { message }
            | CommandError::Hound { message }
            | CommandError::Transcript { message }
            | CommandError::RtrbChunk { message }
            | CommandError::Transport { message } => message,
        }
    }

    /// Text shown to the user when this failure is surfaced.
    pub fn user_message(&self) -> String {
        let message = self.message();
        match self {
            CommandError::PlayStream { .. } => format!("Error starting audio: {message}"),
            CommandError::StopStream { .. } => format!("Error stopping audio: {message}"),
            CommandError::Hound { .. } => format!("Error encoding audio: {message}"),
            CommandError::Transcript { .. } => format!("Transcription error: {message}"),
            CommandError::RtrbChunk { .. } => format!("Error reading audio buffer: {message}"),
            CommandError::Transport { .. } => format!("Error reaching backend: {message}"),
        }
    }

    /// Whether a failed stop must still return the session to idle.
    ///
    /// Only a stream-stop failure leaves the backend recording, so it is the
    /// one kind that keeps the session in `Recording`.
    pub fn forces_reset(&self) -> bool {
        !matches!(self, CommandError::StopStream { .. })
    }
}
