mod controller;
pub(crate) mod elapsed;
mod message;
pub(crate) mod state;
mod transcript;
pub(crate) mod view;

pub use {
    controller::{DEFAULT_TICK_INTERVAL, SessionController},
    elapsed::{ZERO_ELAPSED, elapsed_display, format_elapsed},
    message::ControllerMessage,
    transcript::Transcript,
    view::{
        AWAITING_TRANSCRIPT_INFORMATION, PROMPT_INFORMATION, Phase, RECORDING_INFORMATION,
        SessionView,
    },
};
