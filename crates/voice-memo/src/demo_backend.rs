//! Stand-in recording backend for the terminal front-end.
//!
//! Implements the recording commands without touching an audio device:
//! while "recording" it publishes configured phrases on the
//! `partial-transcript` channel, and on stop it publishes the next pending
//! phrase as the final flush before the command resolves. Failures and a
//! fatal out-of-band error can be injected from configuration.

use crate::{AppResult, config::BackendConfig};

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{sync::Mutex, task::JoinHandle, time::Instant};
use tracing::{debug, info, instrument, warn};
use voice_memo_core::{CommandError, CommandInvoker, EventBus, EventChannel};

/// Background tasks of one recording.
struct Activity {
    speaker: JoinHandle<()>,
    fatal: Option<JoinHandle<()>>,
}

impl Activity {
    fn abort(self) {
        self.speaker.abort();
        if let Some(fatal) = self.fatal {
            fatal.abort();
        }
    }
}

/// Scripted backend publishing onto an [`EventBus`].
pub struct DemoBackend {
    bus: EventBus,
    config: BackendConfig,
    cursor: Arc<AtomicUsize>,
    activity: Mutex<Option<Activity>>,
}

impl DemoBackend {
    /// Create a backend publishing on `bus`.
    pub fn new(bus: EventBus, config: BackendConfig) -> Self {
        Self {
            bus,
            config,
            cursor: Arc::new(AtomicUsize::new(0)),
            activity: Mutex::new(None),
        }
    }
}

impl CommandInvoker for DemoBackend {
    #[instrument(skip(self))]
    async fn start_recording(&self) -> Result<(), CommandError> {
        if let Some(failure) = &self.config.start_failure {
            warn!(kind = failure.kind(), "Injected start failure");
            return Err(failure.clone());
        }

        let mut activity = self.activity.lock().await;
        if let Some(previous) = activity.take() {
            warn!("Start while already recording, restarting phrase stream");
            previous.abort();
        }

        let speaker = tokio::spawn(speak(
            self.bus.clone(),
            self.config.phrases.clone(),
            self.config.phrase_interval(),
            Arc::clone(&self.cursor),
        ));

        let fatal = self.config.fatal_error_after_ms.map(|delay_ms| {
            tokio::spawn(fail_after(self.bus.clone(), Duration::from_millis(delay_ms)))
        });

        *activity = Some(Activity { speaker, fatal });

        info!(phrase_count = self.config.phrases.len(), "Demo recording started");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stop_recording(&self) -> Result<(), CommandError> {
        let mut activity = self.activity.lock().await;

        if let Some(failure) = &self.config.stop_failure {
            warn!(kind = failure.kind(), "Injected stop failure");
            // A stream that failed to stop keeps capturing.
            if failure.forces_reset()
                && let Some(active) = activity.take()
            {
                active.abort();
            }
            return Err(failure.clone());
        }

        let Some(active) = activity.take() else {
            warn!("Stop without an active recording");
            return Ok(());
        };
        active.abort();

        if let Some(tail) = next_phrase(&self.config.phrases, &self.cursor) {
            publish(&self.bus, EventChannel::PartialTranscript, tail)
                .unwrap_or_else(|e| warn!(error = ?e, "Final flush was not delivered"));
        }

        info!("Demo recording stopped");

        Ok(())
    }
}

impl Drop for DemoBackend {
    fn drop(&mut self) {
        if let Some(active) = self.activity.get_mut().take() {
            active.abort();
        }
    }
}

fn next_phrase<'a>(phrases: &'a [String], cursor: &AtomicUsize) -> Option<&'a str> {
    if phrases.is_empty() {
        return None;
    }
    let index = cursor.fetch_add(1, Ordering::Relaxed) % phrases.len();
    phrases.get(index).map(String::as_str)
}

#[track_caller]
fn publish(bus: &EventBus, channel: EventChannel, payload: &str) -> AppResult<()> {
    let delivered = bus.emit(channel, payload)?;
    debug!(channel = %channel, delivered, "Demo event published");
    Ok(())
}

async fn speak(bus: EventBus, phrases: Vec<String>, period: Duration, cursor: Arc<AtomicUsize>) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);

    loop {
        interval.tick().await;

        let Some(phrase) = next_phrase(&phrases, &cursor) else {
            debug!("No phrases configured, phrase stream idle");
            return;
        };

        if let Err(e) = publish(&bus, EventChannel::PartialTranscript, phrase) {
            warn!(error = ?e, "Partial transcript was not delivered");
        }
    }
}

async fn fail_after(bus: EventBus, delay: Duration) {
    tokio::time::sleep(delay).await;

    warn!("Injecting fatal recording error");
    if let Err(e) = publish(&bus, EventChannel::RecordingError, "input stream disconnected") {
        warn!(error = ?e, "Recording error was not delivered");
    }
}
