//! Keyboard edits to the `[controls]` section.

use icoshade_common::Action;
use icoshade_config::schema::ControlsConfig;

/// Apply a control-editing action. Returns whether any value changed.
///
/// Stepping past either end of the detail range is a no-op.
pub(super) fn apply_control_action(controls: &mut ControlsConfig, action: Action) -> bool {
    let before = controls.clone();
    match action {
        Action::IncreaseDetail => {
            controls.step_tessellations(1);
        }
        Action::DecreaseDetail => {
            controls.step_tessellations(-1);
        }
        Action::CycleVertexShader => {
            controls.cycle_vertex_shader();
        }
        Action::CycleFragmentShader => {
            controls.cycle_fragment_shader();
        }
        Action::ResetPattern => controls.reset_pattern(),
        _ => {}
    }
    *controls != before
}

/// Oldest saves are forgotten past this; the watcher would have to be far
/// behind for it to matter.
const MAX_PENDING_SAVES: usize = 16;

/// Controls written to disk by keyboard edits whose reload has not come
/// back through the watcher yet.
///
/// The watcher publishes what it read from the file some time after each
/// save. If more keys were pressed meanwhile, that reload carries older
/// controls than the app already holds.
#[derive(Debug, Default)]
pub(super) struct PendingSaves {
    saved: Vec<ControlsConfig>,
}

impl PendingSaves {
    pub(super) fn record(&mut self, controls: &ControlsConfig) {
        if self.saved.len() == MAX_PENDING_SAVES {
            self.saved.remove(0);
        }
        self.saved.push(controls.clone());
    }

    /// Fix up the controls of a config arriving from the watcher.
    ///
    /// An echo of anything but the newest save is stale and gets `current`
    /// instead. The echo of the newest save, or controls this app never
    /// wrote, clear the pending list and pass through untouched.
    pub(super) fn reconcile(&mut self, incoming: &mut ControlsConfig, current: &ControlsConfig) {
        match self.saved.iter().position(|saved| saved == incoming) {
            Some(i) if i + 1 < self.saved.len() => {
                self.saved.drain(..=i);
                *incoming = current.clone();
            }
            _ => self.saved.clear(),
        }
    }
}
