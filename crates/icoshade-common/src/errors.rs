use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid keybind: {0}")]
    InvalidKeybind(String),

    #[error("window error: {0}")]
    WindowError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IcoshadeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("controls.tessellations = 9".into());
        assert_eq!(
            err.to_string(),
            "config validation error: controls.tessellations = 9"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidKeybind("Hyper+Q".into());
        assert_eq!(err.to_string(), "invalid keybind: Hyper+Q");

        let err = PlatformError::NotSupported("linux wayland".into());
        assert_eq!(err.to_string(), "not supported: linux wayland");
    }

    #[test]
    fn icoshade_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: IcoshadeError = config_err.into();
        assert!(matches!(err, IcoshadeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn icoshade_error_from_platform() {
        let platform_err = PlatformError::WindowError("no display".into());
        let err: IcoshadeError = platform_err.into();
        assert!(matches!(err, IcoshadeError::Platform(_)));
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn icoshade_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: IcoshadeError = io_err.into();
        assert!(matches!(err, IcoshadeError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn icoshade_error_other_variants() {
        let err = IcoshadeError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = IcoshadeError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
