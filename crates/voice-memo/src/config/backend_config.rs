use crate::config::{default_phrase_interval_ms, default_phrases};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use voice_memo_core::CommandError;

/// Demo backend configuration.
///
/// Failures use the backend's wire shape, e.g.
/// `start_failure = { PlayStream = { message = "device busy" } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Phrases published, in order and cycling, while recording.
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,

    /// Delay between published phrases in milliseconds.
    #[serde(default = "default_phrase_interval_ms")]
    pub phrase_interval_ms: u64,

    /// Failure returned by every start command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_failure: Option<CommandError>,

    /// Failure returned by every stop command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_failure: Option<CommandError>,

    /// Publish a fatal recording error this many milliseconds after start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal_error_after_ms: Option<u64>,
}

impl BackendConfig {
    /// Delay between published phrases as a `Duration`.
    pub fn phrase_interval(&self) -> Duration {
        Duration::from_millis(self.phrase_interval_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            phrase_interval_ms: default_phrase_interval_ms(),
            start_failure: None,
            stop_failure: None,
            fatal_error_after_ms: None,
        }
    }
}
