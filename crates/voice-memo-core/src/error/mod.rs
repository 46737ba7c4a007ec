use crate::EventChannel;

use error_location::ErrorLocation;
use thiserror::Error;

/// Session plumbing errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An event was published on a channel that nobody is listening to.
    #[error("No listeners on channel '{channel}' {location}")]
    NoListeners {
        /// Channel the event was published on.
        channel: EventChannel,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
