//! IcoshadeApp struct definition and constructor.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use winit::window::Window;

use icoshade_config::schema::IcoshadeConfig;
use icoshade_platform::{KeybindRegistry, PointerState};
use icoshade_renderer::{FrameTimer, RenderState};

use super::controls::PendingSaves;

/// Everything `main` hands over before the event loop starts.
pub struct AppOptions {
    pub config: IcoshadeConfig,
    pub config_path: PathBuf,
    pub config_rx: watch::Receiver<IcoshadeConfig>,
    pub registry: KeybindRegistry,
    /// `--shader-dir`; takes precedence over `[shaders] directory`.
    pub shader_dir: Option<String>,
    /// Runs the config watcher. Owned here so shutdown can stop it.
    pub runtime: tokio::runtime::Runtime,
}

/// Top-level application state.
pub struct IcoshadeApp {
    pub(super) config: IcoshadeConfig,
    pub(super) config_path: PathBuf,
    pub(super) config_rx: watch::Receiver<IcoshadeConfig>,
    pub(super) registry: KeybindRegistry,
    pub(super) shader_dir_override: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Input
    pub(super) pointer: PointerState,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Frame clock
    pub(super) timer: FrameTimer,
    pub(super) started: Instant,
    pub(super) scene_generation: u64,
    pub(super) pending_saves: PendingSaves,

    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
    /// Set when the session ended on a fatal error.
    pub(super) failed: bool,
}

impl IcoshadeApp {
    pub fn new(options: AppOptions) -> Self {
        let timer = FrameTimer::new()
            .with_report_interval(options.config.performance.stats_interval_secs);
        Self {
            config: options.config,
            config_path: options.config_path,
            config_rx: options.config_rx,
            registry: options.registry,
            shader_dir_override: options.shader_dir,
            window: None,
            render_state: None,
            pointer: PointerState::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            timer,
            started: Instant::now(),
            scene_generation: 0,
            pending_saves: PendingSaves::default(),
            tokio_runtime: Some(options.runtime),
            should_exit: false,
            failed: false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Stop the session on an unrecoverable error.
    pub(super) fn fail(&mut self, message: impl std::fmt::Display) {
        tracing::error!("{message}");
        self.failed = true;
        self.should_exit = true;
    }

    /// Active shader directory: CLI flag first, then config.
    pub(super) fn shader_dir(&self) -> Option<&str> {
        self.shader_dir_override
            .as_deref()
            .or_else(|| self.config.shaders.directory())
    }

    /// Seconds since startup, monotonic.
    pub(super) fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}
