//! Action dispatch: routes resolved actions to the appropriate subsystem.

use icoshade_common::Action;
use icoshade_config::reload::reload_from;
use icoshade_config::save_config_to_path;

use super::controls::apply_control_action;
use super::core::IcoshadeApp;

impl IcoshadeApp {
    /// Dispatch a resolved [`Action`] to the appropriate subsystem.
    pub(super) fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.label(), "dispatch");
        match action {
            Action::IncreaseDetail
            | Action::DecreaseDetail
            | Action::CycleVertexShader
            | Action::CycleFragmentShader
            | Action::ResetPattern => self.edit_controls(action),
            Action::ReloadScene => {
                self.scene_generation += 1;
                tracing::info!("Scene reload requested");
            }
            Action::ReloadConfig => match reload_from(&self.config_path) {
                Ok(config) => self.apply_config(config),
                Err(e) => tracing::warn!("Config reload rejected, keeping previous config: {e}"),
            },
            Action::ToggleFullscreen => {
                if let Some(ref w) = self.window {
                    if w.fullscreen().is_some() {
                        w.set_fullscreen(None);
                    } else {
                        w.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
                    }
                }
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::None => {}
        }
    }

    /// Apply a control edit and write it back so the file shows live values.
    fn edit_controls(&mut self, action: Action) {
        if !apply_control_action(&mut self.config.controls, action) {
            return;
        }
        let controls = &self.config.controls;
        tracing::info!(
            action = action.label(),
            detail = controls.tessellations,
            selection = %controls.variant_selection(),
            "Controls changed"
        );
        match save_config_to_path(&self.config, &self.config_path) {
            Ok(()) => self.pending_saves.record(&self.config.controls),
            Err(e) => tracing::warn!("Failed to save controls to {}: {e}", self.config_path.display()),
        }
    }
}
