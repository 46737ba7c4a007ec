/// Inputs delivered to the session controller's inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerMessage {
    /// The user pressed the record/stop control.
    Toggle,
    /// A fragment of recognized speech arrived.
    PartialTranscript(String),
    /// The backend reported a fatal out-of-band failure.
    RecordingError(String),
    /// Stop the controller loop.
    Shutdown,
}
