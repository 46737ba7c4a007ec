use crate::{Transcript, session::elapsed::ZERO_ELAPSED};

/// Information line before the first recording.
pub const PROMPT_INFORMATION: &str = "Press Record to begin";
/// Information line while recording.
pub const RECORDING_INFORMATION: &str = "Recording in progress.";
/// Information line between the stop request and its result.
pub const AWAITING_TRANSCRIPT_INFORMATION: &str = "Transcript will appear when ready.";

/// Which way the toggle control currently points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready to start recording.
    Idle,
    /// Currently recording audio.
    Recording,
}

/// Snapshot of everything the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Current phase of the session.
    pub phase: Phase,
    /// Elapsed readout, `MM:SS`.
    pub elapsed: String,
    /// Status line for the current phase; empty when cleared.
    pub information: String,
    /// Last surfaced failure; empty when none.
    pub error: String,
    /// Live, then final, transcript.
    pub transcript: Transcript,
    /// Set once a fatal out-of-band error arrived. Only a client restart
    /// clears it.
    pub restart_required: bool,
}

impl SessionView {
    /// Label of the toggle control.
    pub fn toggle_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Record",
            Phase::Recording => "Stop",
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            elapsed: ZERO_ELAPSED.to_string(),
            information: PROMPT_INFORMATION.to_string(),
            error: String::new(),
            transcript: Transcript::default(),
            restart_required: false,
        }
    }
}
