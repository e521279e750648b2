mod app_state;
mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use icoshade_common::{ConfigError, PlatformError};
use icoshade_config::toml_loader;
use icoshade_config::{IcoshadeConfig, ReloadManager};
use icoshade_platform::KeybindRegistry;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app_state::{AppOptions, IcoshadeApp};

fn resolve_config_path(arg: Option<&str>) -> Result<PathBuf, ConfigError> {
    match arg {
        Some(path) => Ok(PathBuf::from(path)),
        None => toml_loader::default_config_path(),
    }
}

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("ignoring log directive '{part}': {e}"),
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

type Started = (
    tokio::runtime::Runtime,
    IcoshadeConfig,
    watch::Receiver<IcoshadeConfig>,
    EventLoop<()>,
);

/// Bring up the runtime, the validated config with its watcher, and the
/// event loop. Any failure here ends the process.
fn start(config_path: &Path) -> icoshade_common::Result<Started> {
    let runtime = tokio::runtime::Runtime::new()?;
    let (config, config_rx) = runtime.block_on(ReloadManager::start(config_path.to_path_buf()))?;
    let event_loop = EventLoop::new()
        .map_err(|e| PlatformError::WindowError(format!("failed to create event loop: {e}")))?;
    Ok((runtime, config, config_rx, event_loop))
}

fn main() -> ExitCode {
    let args = cli::parse();
    let config_path = resolve_config_path(args.config.as_deref());

    // The log level lives in the config, so read it before the subscriber
    // exists. The real load below reports any problems.
    let configured_level = config_path
        .as_ref()
        .ok()
        .and_then(|path| toml_loader::load_from_path(path).ok())
        .map(|config| config.logging.level);
    init_logging(&cli::log_directive(args.log_level.as_deref(), configured_level));

    tracing::info!("icoshade v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = match config_path {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Cannot locate config file: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.config.is_some() {
        tracing::info!("Using config override: {}", config_path.display());
    }

    let (runtime, config, config_rx, event_loop) = match start(&config_path) {
        Ok(started) => started,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let registry = KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());
    for line in registry.help_lines() {
        tracing::debug!("{line}");
    }

    let mut app = IcoshadeApp::new(AppOptions {
        config,
        config_path,
        config_rx,
        registry,
        shader_dir: args.shader_dir,
        runtime,
    });

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    app.exit_code()
}
