//! Forwards backend events into the session controller.
//!
//! One forwarding task per [`EventChannel`] holds that channel's
//! subscription. Each received payload becomes exactly one
//! [`ControllerMessage`] in the controller inbox, so the controller stays
//! the only writer of session state.

use crate::{ControllerMessage, EventBus, EventChannel};

use std::time::Duration;

use tokio::{
    sync::{broadcast, mpsc},
    task::JoinHandle,
};
use tracing::{debug, info, instrument, warn};

/// How long deactivation waits for each forwarder to wind down.
const FORWARDER_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Live subscriptions to every backend event channel.
///
/// Subscriptions are released by [`NotificationBridge::deactivate`], or on
/// drop if the owner never got that far.
pub struct NotificationBridge {
    forwarders: Vec<(EventChannel, JoinHandle<()>)>,
}

impl NotificationBridge {
    /// Subscribe to every channel on `bus` and forward events to `inbox`.
    ///
    /// Subscriptions are taken before this returns, so no event published
    /// afterwards is missed. Must be called from within a tokio runtime.
    #[instrument(skip_all)]
    pub fn activate(bus: &EventBus, inbox: mpsc::Sender<ControllerMessage>) -> Self {
        let forwarders = EventChannel::ALL
            .into_iter()
            .map(|channel| {
                let listener = bus.listen(channel);
                let handle = tokio::spawn(forward(channel, listener, inbox.clone()));
                (channel, handle)
            })
            .collect();

        info!("Notification bridge active");

        Self { forwarders }
    }

    /// Unsubscribe from every channel and wait for the forwarders to finish.
    #[instrument(skip_all)]
    pub async fn deactivate(mut self) {
        for (channel, handle) in std::mem::take(&mut self.forwarders) {
            handle.abort();

            match tokio::time::timeout(FORWARDER_JOIN_TIMEOUT, handle).await {
                Ok(Ok(())) => debug!(channel = %channel, "Forwarder stopped cleanly"),
                Ok(Err(e)) if e.is_cancelled() => {
                    debug!(channel = %channel, "Forwarder cancelled")
                }
                Ok(Err(e)) => warn!(channel = %channel, error = ?e, "Forwarder task panicked"),
                Err(_) => debug!(
                    channel = %channel,
                    "Forwarder did not stop within timeout, will be cleaned up on exit"
                ),
            }
        }

        info!("Notification bridge deactivated");
    }
}

impl Drop for NotificationBridge {
    fn drop(&mut self) {
        for (channel, handle) in &self.forwarders {
            debug!(channel = %channel, "Releasing subscription on drop");
            handle.abort();
        }
    }
}

async fn forward(
    channel: EventChannel,
    mut listener: broadcast::Receiver<String>,
    inbox: mpsc::Sender<ControllerMessage>,
) {
    loop {
        match listener.recv().await {
            Ok(payload) => {
                if inbox.send(channel.into_message(payload)).await.is_err() {
                    debug!(channel = %channel, "Controller inbox closed, forwarder stopping");
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(channel = %channel, skipped, "Listener fell behind, events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!(channel = %channel, "Event bus closed, forwarder stopping");
                break;
            }
        }
    }
}
