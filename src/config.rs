//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::persistence::get_app_data_dir;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "A personal portfolio page as a desktop app")]
pub struct Cli {
    /// HJSON file with the page content (default: built-in portfolio)
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Directory for saved preferences (default: the per-user data directory)
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long = "log-level", env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub log_level: Level,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            content: cli.content,
            data_dir: cli.data_dir.unwrap_or_else(get_app_data_dir),
            log_level: parse_log_level(&cli.log_level),
        }
    }
}

/// Unknown names fall back to `info`.
pub fn parse_log_level(name: &str) -> Level {
    match name.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level(" warn "), Level::WARN);
        assert_eq!(parse_log_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "folio",
            "--content",
            "page.hjson",
            "--data-dir",
            "/tmp/folio",
            "--log-level",
            "error",
        ])
        .unwrap();
        let config = AppConfig::from(cli);

        assert_eq!(config.content, Some(PathBuf::from("page.hjson")));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/folio"));
        assert_eq!(config.log_level, Level::ERROR);
    }

    #[test]
    fn test_data_dir_defaults_to_app_dir() {
        let config = AppConfig::from(Cli::try_parse_from(["folio"]).unwrap());
        assert_eq!(config.content, None);
        assert_eq!(config.data_dir, get_app_data_dir());
    }
}
