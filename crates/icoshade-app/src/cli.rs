use clap::Parser;

use icoshade_config::schema::LogLevel;

/// icoshade: a subdivided sphere with hot-swappable shaders.
#[derive(Parser, Debug)]
#[command(name = "icoshade", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive (e.g. `debug`, `icoshade=trace,wgpu=warn`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load WGSL from this directory instead of the built-in shaders.
    #[arg(long)]
    pub shader_dir: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Default filter when neither the CLI nor the config says otherwise.
pub const DEFAULT_LOG_DIRECTIVE: &str = "icoshade=info";

/// Pick the log filter: CLI flag, then config level, then the default.
pub fn log_directive(cli: Option<&str>, config: Option<LogLevel>) -> String {
    match (cli, config) {
        (Some(directive), _) => directive.to_owned(),
        (None, Some(level)) => format!("icoshade={}", level.as_directive()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "icoshade",
            "--config",
            "/tmp/ico.toml",
            "--log-level",
            "debug",
            "--shader-dir",
            "./wgsl",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/ico.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.shader_dir.as_deref(), Some("./wgsl"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["icoshade"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.shader_dir.is_none());
    }

    #[test]
    fn cli_directive_wins() {
        assert_eq!(
            log_directive(Some("trace"), Some(LogLevel::Warn)),
            "trace"
        );
    }

    #[test]
    fn config_level_beats_default() {
        assert_eq!(log_directive(None, Some(LogLevel::Debug)), "icoshade=debug");
        assert_eq!(log_directive(None, None), DEFAULT_LOG_DIRECTIVE);
    }
}
