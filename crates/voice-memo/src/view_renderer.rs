//! Terminal renderer for the session view.
//!
//! Redraws the status block every time the controller publishes a changed
//! [`SessionView`]; stops once the controller is gone.

use crate::AppResult;

use std::io::Write;

use tokio::sync::watch;
use tracing::{debug, instrument};
use voice_memo_core::SessionView;

/// Format a view as the lines shown in the terminal.
///
/// The first line is the toggle and elapsed readout, e.g. `[Record] 00:00`.
/// Error, information and transcript follow when non-empty.
pub fn render(view: &SessionView) -> String {
    let mut lines = vec![format!("[{}] {}", view.toggle_label(), view.elapsed)];

    if !view.error.is_empty() {
        lines.push(format!("error: {}", view.error));
    }
    if !view.information.is_empty() {
        lines.push(format!("info: {}", view.information));
    }
    if !view.transcript.is_empty() {
        lines.push(format!("transcript: {}", view.transcript));
    }

    lines.join("\n")
}

/// Writes each published view to `out`.
pub struct ViewRenderer<W> {
    views: watch::Receiver<SessionView>,
    out: W,
}

impl<W: Write> ViewRenderer<W> {
    /// Create a renderer drawing `views` onto `out`.
    pub fn new(views: watch::Receiver<SessionView>, out: W) -> Self {
        Self { views, out }
    }

    /// Draw the current view, then every change until the publisher drops.
    ///
    /// Hands the writer back when done.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> AppResult<W> {
        self.draw()?;

        while self.views.changed().await.is_ok() {
            self.draw()?;
        }

        debug!("View publisher closed, renderer stopping");

        Ok(self.out)
    }

    fn draw(&mut self) -> AppResult<()> {
        let frame = render(&self.views.borrow_and_update());

        writeln!(self.out, "{}\n", frame)?;
        self.out.flush()?;

        Ok(())
    }
}
