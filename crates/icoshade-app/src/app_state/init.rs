//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use icoshade_config::schema::StartupMode;
use icoshade_renderer::RenderState;

use super::core::IcoshadeApp;

impl IcoshadeApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(wc.width as f64, wc.height as f64));
        let attrs = match wc.startup_mode {
            StartupMode::Windowed => attrs,
            StartupMode::Maximized => attrs.with_maximized(true),
            StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(format_args!("Failed to create window: {e}"));
                return false;
            }
        };

        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            &self.config,
            self.shader_dir(),
        ));

        match render_state {
            Ok(rs) => self.render_state = Some(rs),
            Err(e) => {
                self.fail(format_args!("Failed to initialize renderer: {e}"));
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }
}
