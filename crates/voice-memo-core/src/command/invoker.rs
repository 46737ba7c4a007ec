use crate::CommandError;

use std::future::Future;

/// Issues recording commands to the backend.
///
/// Both commands take no arguments and resolve once the backend has a
/// terminal answer. The stop command resolves with no payload: the
/// transcript is built from streamed `partial-transcript` events.
pub trait CommandInvoker: Send + Sync + 'static {
    /// Ask the backend to open and start the audio stream.
    fn start_recording(&self) -> impl Future<Output = Result<(), CommandError>> + Send;

    /// Ask the backend to stop, flush and transcribe the recording.
    fn stop_recording(&self) -> impl Future<Output = Result<(), CommandError>> + Send;
}
