//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] struct that monitors a config file
//! for changes using the `notify` crate, with debounced notifications.

use icoshade_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period after the last filesystem event before a reload is signalled.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    /// Watch the config file, sending `()` on `tx` after each burst of changes.
    ///
    /// Runs until the underlying notify channel closes. The parent directory
    /// is watched rather than the file so that editors which save by
    /// writing a temp file and renaming it are still picked up.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = self
            .path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.path.clone());
        let file_name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        let (event_tx, mut event_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if touches_file(&event, &file_name) => {
                    debug!("config file change detected");
                    let _ = event_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        while event_rx.recv().await.is_some() {
            // Coalesce everything that arrives within the debounce window.
            let quiet = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(quiet);
            loop {
                tokio::select! {
                    _ = &mut quiet => break,
                    msg = event_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Whether a notify event is a write or creation of the watched file.
fn touches_file(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use std::ffi::OsString;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn modify_of_config_file_counts() {
        let name = OsString::from("config.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/cfg/config.toml");
        assert!(touches_file(&e, &name));
        let e = event(EventKind::Create(CreateKind::File), "/cfg/config.toml");
        assert!(touches_file(&e, &name));
    }

    #[test]
    fn other_files_and_removals_are_ignored() {
        let name = OsString::from("config.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/cfg/other.toml");
        assert!(!touches_file(&e, &name));
        let e = event(EventKind::Remove(RemoveKind::File), "/cfg/config.toml");
        assert!(!touches_file(&e, &name));
    }
}
