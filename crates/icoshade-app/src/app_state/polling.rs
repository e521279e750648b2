//! Config reload polling and frame scheduling.

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use icoshade_config::schema::IcoshadeConfig;
use icoshade_platform::KeybindRegistry;
use icoshade_renderer::provider_for;

use super::core::IcoshadeApp;

impl IcoshadeApp {
    /// Pick up a config published by the reload manager, if any.
    ///
    /// Non-blocking. Called at the top of every frame so the frame loop
    /// stays the only writer of mesh, program and camera.
    pub(super) fn poll_config(&mut self) {
        // Err means the watcher is gone; keep running on the current config.
        if let Ok(true) = self.config_rx.has_changed() {
            let mut config = self.config_rx.borrow_and_update().clone();
            self.pending_saves
                .reconcile(&mut config.controls, &self.config.controls);
            self.apply_config(config);
        }
    }

    /// Switch to an already-validated config.
    pub(super) fn apply_config(&mut self, config: IcoshadeConfig) {
        if config == self.config {
            tracing::debug!("Reloaded config matches current state");
            return;
        }

        if config.keybinds != self.config.keybinds {
            self.registry = KeybindRegistry::from_config(&config.keybinds);
            tracing::info!("Keybind registry reloaded ({} bindings)", self.registry.len());
        }
        if config.performance.present_mode != self.config.performance.present_mode {
            tracing::info!("present_mode takes effect on next start");
        }

        let old_dir = self.shader_dir().map(str::to_owned);
        self.config = config;
        let new_dir = self.shader_dir().map(str::to_owned);

        self.timer
            .set_report_interval(self.config.performance.stats_interval_secs);

        if let Some(rs) = self.render_state.as_mut() {
            rs.apply_config(&self.config);
            if new_dir != old_dir {
                rs.set_shader_source(provider_for(new_dir.as_deref()));
            }
        }

        tracing::info!(
            detail = self.config.controls.tessellations,
            selection = %self.config.controls.variant_selection(),
            "Config applied"
        );
    }

    /// Keep frames coming: the scene animates continuously.
    pub(super) fn schedule_frame(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
