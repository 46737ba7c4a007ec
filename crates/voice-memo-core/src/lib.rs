//! Voice-memo Core Library
//!
//! Client-side session controller for a record-then-transcribe workflow:
//! a two-state recording machine with a live elapsed readout, an
//! accumulating transcript fed by streamed partial results, and a bridge
//! that forwards backend events into the controller.
//!
//! # Example
//!
//! ```no_run
//! use voice_memo_core::{
//!     CommandError, CommandInvoker, ControllerMessage, DEFAULT_TICK_INTERVAL, EventBus,
//!     NotificationBridge, SessionController,
//! };
//!
//! struct Backend;
//!
//! impl CommandInvoker for Backend {
//!     async fn start_recording(&self) -> Result<(), CommandError> {
//!         Ok(())
//!     }
//!
//!     async fn stop_recording(&self) -> Result<(), CommandError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = EventBus::default();
//!     let (inbox_tx, inbox_rx) = tokio::sync::mpsc::channel(32);
//!
//!     let controller = SessionController::new(Backend, DEFAULT_TICK_INTERVAL);
//!     let mut views = controller.subscribe();
//!     let bridge = NotificationBridge::activate(&bus, inbox_tx.clone());
//!     let task = tokio::spawn(controller.run(inbox_rx));
//!
//!     let _ = inbox_tx.send(ControllerMessage::Toggle).await;
//!     let _ = views.changed().await;
//!     println!("{} {}", views.borrow().toggle_label(), views.borrow().elapsed);
//!
//!     let _ = inbox_tx.send(ControllerMessage::Shutdown).await;
//!     let _ = task.await;
//!     bridge.deactivate().await;
//! }
//! ```

mod bridge;
mod command;
mod error;
mod session;

pub use {
    bridge::{
        DEFAULT_BUS_CAPACITY, EventBus, EventChannel, NotificationBridge, PARTIAL_TRANSCRIPT,
        RECORDING_ERROR,
    },
    command::{CommandError, CommandInvoker},
    error::{CoreError, Result as CoreResult},
    session::{
        AWAITING_TRANSCRIPT_INFORMATION, ControllerMessage, DEFAULT_TICK_INTERVAL, PROMPT_INFORMATION,
        Phase, RECORDING_INFORMATION, SessionController, SessionView, Transcript, ZERO_ELAPSED,
        elapsed_display, format_elapsed,
    },
};
