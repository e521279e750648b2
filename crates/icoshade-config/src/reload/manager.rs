//! Core reload manager implementation.
//!
//! Contains the [`ReloadManager`] struct and its methods for loading,
//! watching, and reloading configuration from disk.

use crate::schema::IcoshadeConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use icoshade_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel. Only configs that pass
/// validation are published.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// Returns the initial config and a watch receiver that will receive
    /// updated configs whenever the file changes on disk. A missing file is
    /// created with defaults. The initial config must validate; an invalid
    /// startup config is returned as an error.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(
        config_path: PathBuf,
    ) -> Result<(IcoshadeConfig, watch::Receiver<IcoshadeConfig>), ConfigError> {
        let initial_config = toml_loader::load_or_create(&config_path)?;
        validation::validate(&initial_config)?;

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx).await;
        });

        Ok((initial_config, config_rx))
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<IcoshadeConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_from(&self.config_path) {
                        Ok(config) => {
                            // Writes from our own save path produce identical configs.
                            config_tx.send_if_modified(|current| {
                                if *current == config {
                                    false
                                } else {
                                    *current = config;
                                    true
                                }
                            });
                        }
                        Err(e) => {
                            warn!("config reload rejected, keeping previous config: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
            if config_tx.is_closed() {
                info!("all config receivers dropped, stopping reload manager");
                break;
            }
        }
    }
}

/// Read and validate the config at `path`.
///
/// Used both by the watch loop and by explicit reload requests.
pub fn reload_from(path: &Path) -> Result<IcoshadeConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
