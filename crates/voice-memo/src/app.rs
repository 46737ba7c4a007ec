use crate::{AppResult, DemoBackend, InputHandler, ViewRenderer, config::Config};

use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use voice_memo_core::{EventBus, NotificationBridge, SessionController};

/// Main application state.
///
/// Wires the demo backend, the notification bridge, the session controller
/// and the terminal front-end together, then runs until the user quits.
pub struct App {
    pub(crate) config: Config,
}

impl App {
    /// Create the application from loaded configuration.
    pub(crate) fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until the user quits or input ends.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Voice-Memo starting");

        let bus = EventBus::new(self.config.events.bus_capacity);
        let backend = DemoBackend::new(bus.clone(), self.config.backend.clone());

        let controller = SessionController::new(backend, self.config.session.tick_interval());
        let views = controller.subscribe();

        let (inbox_tx, inbox_rx) = mpsc::channel(self.config.events.inbox_capacity);
        let bridge = NotificationBridge::activate(&bus, inbox_tx.clone());

        let controller_task = tokio::spawn(controller.run(inbox_rx));
        let renderer_task = tokio::spawn(ViewRenderer::new(views, std::io::stdout()).run());

        let input_result = InputHandler::new(inbox_tx).run().await;
        if let Err(e) = &input_result {
            error!(error = ?e, "Input handler error");
        }

        if let Err(e) = controller_task.await {
            error!(error = ?e, "Session controller task panicked");
        }

        bridge.deactivate().await;

        match renderer_task.await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => error!(error = ?e, "View renderer error"),
            Err(e) => error!(error = ?e, "View renderer task panicked"),
        }

        info!("Voice-Memo shut down successfully");

        input_result
    }
}
