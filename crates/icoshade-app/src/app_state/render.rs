//! Frame rendering logic.

use icoshade_renderer::{FrameSnapshot, ShadingParameters};

use super::core::IcoshadeApp;

impl IcoshadeApp {
    /// Render a single frame from the current controls, pointer and clock.
    pub(super) fn render_frame(&mut self) {
        self.poll_config();
        self.timer.begin_frame();

        let controls = &self.config.controls;
        let snapshot = FrameSnapshot::from_controls(controls, self.scene_generation);
        let params =
            ShadingParameters::from_controls(controls, self.elapsed(), self.pointer.position());

        let Some(rs) = self.render_state.as_mut() else {
            return;
        };
        match rs.render_frame(snapshot, &params) {
            Ok(_) => {}
            Err(e) if e.is_fatal() => self.fail(format_args!("Render session halted: {e}")),
            Err(e) => tracing::warn!("Render error: {e}"),
        }
    }
}
