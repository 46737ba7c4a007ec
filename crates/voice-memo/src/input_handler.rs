//! Terminal input handler.
//!
//! Reads lines from stdin on a blocking thread and turns them into
//! controller messages: an empty line or `r` toggles recording, `q` quits.
//! End of input also quits.

use crate::{AppError, AppResult};

use std::{
    io::{BufRead, BufReader},
    panic::Location,
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use voice_memo_core::ControllerMessage;

/// Map one line of user input to a controller message.
///
/// Returns `None` for input that means nothing.
pub fn parse_input(line: &str) -> Option<ControllerMessage> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "r" | "record" | "stop" => Some(ControllerMessage::Toggle),
        "q" | "quit" | "exit" => Some(ControllerMessage::Shutdown),
        _ => None,
    }
}

/// Forwards terminal input into the controller inbox.
pub struct InputHandler {
    inbox: mpsc::Sender<ControllerMessage>,
}

impl InputHandler {
    /// Create a handler sending into `inbox`.
    pub fn new(inbox: mpsc::Sender<ControllerMessage>) -> Self {
        Self { inbox }
    }

    /// Read stdin until the user quits or input ends.
    pub async fn run(&self) -> AppResult<()> {
        self.run_with(BufReader::new(std::io::stdin())).await
    }

    /// Read `reader` until the user quits or input ends.
    ///
    /// Always finishes by asking the controller to shut down.
    #[instrument(skip(self, reader))]
    pub async fn run_with<R>(&self, reader: R) -> AppResult<()>
    where
        R: BufRead + Send + 'static,
    {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);

        // Dropping line_rx makes the next blocking_send fail and ends the loop.
        let handle = tokio::task::spawn_blocking(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if line_tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = ?e, "Failed to read input");
                        break;
                    }
                }
            }
        });

        loop {
            let Some(line) = line_rx.recv().await else {
                info!("Input closed");
                self.send(ControllerMessage::Shutdown).await?;
                break;
            };

            match parse_input(&line) {
                Some(ControllerMessage::Shutdown) => {
                    info!("Quit requested");
                    self.send(ControllerMessage::Shutdown).await?;
                    break;
                }
                Some(message) => self.send(message).await?,
                None => warn!(input = %line.trim(), "Unrecognised input, use Enter/r or q"),
            }
        }

        drop(line_rx);

        // The blocking reader may stay parked in read() until more input
        // arrives; it is released on runtime shutdown.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Input forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Input forwarder task panicked"),
            Err(_) => debug!(
                "Input forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    async fn send(&self, message: ControllerMessage) -> AppResult<()> {
        let location = ErrorLocation::from(Location::caller());

        self.inbox
            .send(message)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: controller inbox closed", e.0),
                location,
            })
    }
}
