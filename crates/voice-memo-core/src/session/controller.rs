//! Recording session state machine.
//!
//! The controller is the single writer of session state. Every input (user
//! toggle, elapsed tick, partial transcript, fatal backend error) goes
//! through one handler, and the resulting [`SessionView`] is published on a
//! `watch` channel whenever something visible changed.

use crate::{
    CommandError, CommandInvoker, ControllerMessage, Phase, SessionView,
    session::{
        elapsed::{ZERO_ELAPSED, elapsed_display},
        state::{SessionState, Ticker},
        view::{AWAITING_TRANSCRIPT_INFORMATION, RECORDING_INFORMATION},
    },
};

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    time::Instant,
};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Period of the elapsed-time ticker.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

enum LoopInput {
    Message(ControllerMessage),
    Tick(Instant),
}

/// Owns the recording state machine and everything it displays.
pub struct SessionController<I> {
    invoker: I,
    tick_interval: Duration,
    state: SessionState,
    view: SessionView,
    view_tx: watch::Sender<SessionView>,
}

impl<I: CommandInvoker> SessionController<I> {
    /// Create an idle controller that drives `invoker`.
    ///
    /// A zero `tick_interval` falls back to [`DEFAULT_TICK_INTERVAL`].
    pub fn new(invoker: I, tick_interval: Duration) -> Self {
        let tick_interval = if tick_interval.is_zero() {
            warn!("Zero tick interval requested, using default");
            DEFAULT_TICK_INTERVAL
        } else {
            tick_interval
        };

        let view = SessionView::default();
        let (view_tx, _) = watch::channel(view.clone());

        Self {
            invoker,
            tick_interval,
            state: SessionState::Idle,
            view,
            view_tx,
        }
    }

    /// Subscribe to published views. The receiver starts at the current view.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view_tx.subscribe()
    }

    /// Current view.
    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// True while the session is recording (and therefore ticking).
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// Process inbox messages and ticks until shutdown.
    ///
    /// Handlers run one at a time; a handler that awaits a command holds
    /// back the next input until the command resolves, so inputs are always
    /// applied in arrival order.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut inbox: mpsc::Receiver<ControllerMessage>) {
        info!("Session controller started");

        loop {
            let input = tokio::select! {
                message = inbox.recv() => match message {
                    Some(message) => LoopInput::Message(message),
                    None => {
                        info!("Controller inbox closed, shutting down");
                        break;
                    }
                },
                now = self.state.next_tick() => LoopInput::Tick(now),
            };

            match input {
                LoopInput::Tick(now) => self.tick(now),
                LoopInput::Message(ControllerMessage::Toggle) => self.toggle().await,
                LoopInput::Message(ControllerMessage::PartialTranscript(fragment)) => {
                    self.append_partial(&fragment)
                }
                LoopInput::Message(ControllerMessage::RecordingError(message)) => {
                    self.recording_error(&message)
                }
                LoopInput::Message(ControllerMessage::Shutdown) => {
                    info!("Shutdown requested");
                    break;
                }
            }
        }

        if let SessionState::Recording { session_id, ticker } =
            std::mem::take(&mut self.state)
        {
            warn!(session_id = %session_id, "Controller stopped while recording");
            ticker.cancel(session_id);
        }

        info!("Session controller stopped");
    }

    /// Start or stop depending on the current state.
    pub async fn toggle(&mut self) {
        if self.state.is_recording() {
            self.stop_recording().await;
        } else {
            self.start_recording().await;
        }
    }

    /// Ask the backend to start recording and begin ticking on acceptance.
    #[instrument(skip(self))]
    pub async fn start_recording(&mut self) {
        if self.state.is_recording() {
            warn!("Start requested while already recording, ignoring");
            return;
        }

        match self.invoker.start_recording().await {
            Ok(()) => {
                let session_id = Uuid::new_v4();

                self.view.information = RECORDING_INFORMATION.to_string();
                self.view.transcript.clear();
                self.view.elapsed = ZERO_ELAPSED.to_string();
                self.view.phase = Phase::Recording;
                self.state = SessionState::Recording {
                    session_id,
                    ticker: Ticker::start(self.tick_interval),
                };

                info!(session_id = %session_id, "Recording started");
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Start command failed");
                self.surface(&e);
            }
        }

        self.publish();
    }

    /// Ask the backend to stop and fold its outcome into the session.
    #[instrument(skip(self))]
    pub async fn stop_recording(&mut self) {
        if !self.state.is_recording() {
            warn!("Stop requested while idle, ignoring");
            return;
        }

        self.view.information = AWAITING_TRANSCRIPT_INFORMATION.to_string();
        self.publish();

        match self.invoker.stop_recording().await {
            Ok(()) => {
                self.reset_to_idle();
                info!(
                    transcript_len = self.view.transcript.as_str().len(),
                    "Recording stopped"
                );
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Stop command failed");
                self.surface(&e);

                if e.forces_reset() {
                    self.reset_to_idle();
                } else {
                    // The backend is still capturing; keep the session live
                    // so the user can stop again.
                    self.view.information = RECORDING_INFORMATION.to_string();
                }
            }
        }

        self.publish();
    }

    /// Recompute the elapsed readout from the recording start.
    pub fn tick(&mut self, now: Instant) {
        let SessionState::Recording { ticker, .. } = &self.state else {
            debug!("Tick while idle, ignoring");
            return;
        };

        self.view.elapsed = elapsed_display(ticker.started_at(), now);
        self.publish();
    }

    /// Append a streamed fragment to the transcript.
    ///
    /// Not gated on the recording state: the backend's final flush may land
    /// after the stop command resolved.
    pub fn append_partial(&mut self, fragment: &str) {
        self.view.transcript.append(fragment);
        debug!(fragment_len = fragment.len(), "Partial transcript appended");
        self.publish();
    }

    /// Surface a fatal out-of-band failure. Only a client restart recovers.
    pub fn recording_error(&mut self, message: &str) {
        error!(reason = message, "Fatal recording error");
        self.view.error = format!("Error: {message}. Please restart the client.");
        self.view.restart_required = true;
        self.publish();
    }

    fn surface(&mut self, e: &CommandError) {
        self.view.error = e.user_message();
    }

    /// Leave `Recording`: cancel the ticker and clear the live readouts.
    /// The transcript is kept.
    fn reset_to_idle(&mut self) {
        if let SessionState::Recording { session_id, ticker } =
            std::mem::take(&mut self.state)
        {
            ticker.cancel(session_id);
        }

        self.view.information.clear();
        self.view.phase = Phase::Idle;
        self.view.elapsed = ZERO_ELAPSED.to_string();
    }

    fn publish(&self) {
        self.view_tx.send_if_modified(|current| {
            if *current == self.view {
                false
            } else {
                current.clone_from(&self.view);
                true
            }
        });
    }
}
