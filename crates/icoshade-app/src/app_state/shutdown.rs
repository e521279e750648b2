//! Graceful shutdown: release GPU resources, stop the config watcher.

use std::time::Duration;

use super::core::IcoshadeApp;

impl IcoshadeApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Release GPU resources (the surface borrows the window)
    /// 2. Drop the window
    /// 3. Shut down tokio runtime (stops the config watcher)
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.render_state = None;
        self.window = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }
    }
}
