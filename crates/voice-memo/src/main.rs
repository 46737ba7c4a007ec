//! Voice-Memo: terminal voice recorder with live transcript.

mod app;
mod config;
mod demo_backend;
mod error;
mod input_handler;
mod view_renderer;

pub(crate) use {
    app::App,
    demo_backend::DemoBackend,
    error::{AppError, Result as AppResult},
    input_handler::InputHandler,
    view_renderer::ViewRenderer,
};

use crate::config::Config;

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "voice_memo=debug,voice_memo_core=debug";

/// Application entry point.
fn main() {
    // stdout belongs to the view renderer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let result = rt.block_on(App::new(config).run());

    // The stdin reader may still be parked in a blocking read.
    rt.shutdown_timeout(Duration::from_secs(1));

    if let Err(e) = result {
        error!(error = ?e, "App error");
        std::process::exit(1);
    }
}

#[track_caller]
fn build_runtime() -> AppResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::RuntimeError {
            reason: format!("Failed to build runtime: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
