//! CLI argument definitions for the Parley application.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use parley_core::{ParleyConfig, ParleyError};
use std::path::PathBuf;

/// Parley - an intent-classifying chatbot with weather, news, and
/// encyclopedia lookups.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Interface to bind the API server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed for template selection; makes replies reproducible.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Answer a single message on stdout and exit instead of serving.
    #[arg(short = 'm', long = "message")]
    pub message: Option<String>,
}

/// Configuration after CLI overrides, plus where it came from.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: ParleyConfig,
    pub path: PathBuf,
    /// `false` when no file existed at `path` and defaults were used.
    pub from_file: bool,
}

impl CliArgs {
    /// Load the config file (if any) and apply command-line overrides.
    ///
    /// A config file that exists but does not parse is an error.
    pub fn resolve_config(&self) -> Result<ResolvedConfig, ParleyError> {
        let path = self.resolve_config_path();
        let loaded = ParleyConfig::load_if_exists(&path)?;
        let from_file = loaded.is_some();
        let mut config = loaded.unwrap_or_default();

        config.server.port = self.resolve_port(config.server.port);
        config.server.host = self.resolve_host(&config.server.host);
        config.general.log_level = self.resolve_log_level(&config.general.log_level);
        config.chat.seed = self.resolve_seed(config.chat.seed);

        Ok(ResolvedConfig {
            config,
            path,
            from_file,
        })
    }

    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PARLEY_CONFIG env var > ~/.parley/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("PARLEY_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > PARLEY_PORT env var > config file value > 8080.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("PARLEY_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        8080
    }

    pub fn resolve_host(&self, config_host: &str) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| config_host.to_string())
    }

    /// Resolve the log filter. `RUST_LOG` still wins over both when set.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    pub fn resolve_seed(&self, config_seed: Option<u64>) -> Option<u64> {
        self.seed.or(config_seed)
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".parley").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".parley").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("parley").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&["--port", "9000", "--host", "0.0.0.0", "-l", "debug", "--seed", "7"]);
        assert_eq!(args.resolve_port(8080), 9000);
        assert_eq!(args.resolve_host("127.0.0.1"), "0.0.0.0");
        assert_eq!(args.resolve_log_level("info"), "debug");
        assert_eq!(args.resolve_seed(Some(1)), Some(7));
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let args = parse(&[]);
        assert_eq!(args.resolve_host("127.0.0.1"), "127.0.0.1");
        assert_eq!(args.resolve_log_level("warn"), "warn");
        assert_eq!(args.resolve_seed(Some(3)), Some(3));
        assert_eq!(args.resolve_seed(None), None);
        assert!(args.message.is_none());
    }

    #[test]
    fn test_explicit_config_path() {
        let args = parse(&["-c", "/tmp/parley.toml"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/parley.toml"));
    }

    #[test]
    fn test_one_shot_message() {
        let args = parse(&["-m", "tell me a joke"]);
        assert_eq!(args.message.as_deref(), Some("tell me a joke"));
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_config_reads_file_and_applies_flags() {
        let file = write_config("[chat]\nseed = 5\n\n[server]\nport = 9100\n");
        let path = file.path().to_str().unwrap();
        let args = parse(&["-c", path, "--host", "0.0.0.0"]);

        let resolved = args.resolve_config().unwrap();
        assert!(resolved.from_file);
        assert_eq!(resolved.config.chat.seed, Some(5));
        assert_eq!(resolved.config.server.host, "0.0.0.0");
        if std::env::var("PARLEY_PORT").is_err() {
            assert_eq!(resolved.config.server.port, 9100);
        }
    }

    #[test]
    fn test_resolve_config_rejects_malformed_file() {
        let file = write_config("this is {{ not valid TOML\n[chat]\nseed = 5\n");
        let args = parse(&["-c", file.path().to_str().unwrap()]);
        assert!(matches!(args.resolve_config(), Err(ParleyError::Config(_))));
    }

    #[test]
    fn test_resolve_config_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let args = parse(&["-c", path.to_str().unwrap(), "--seed", "11"]);

        let resolved = args.resolve_config().unwrap();
        assert!(!resolved.from_file);
        assert_eq!(resolved.path, path);
        assert_eq!(resolved.config.chat.seed, Some(11));
        assert_eq!(resolved.config.chat.max_message_length, 2000);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(CliArgs::try_parse_from(["parley", "--port", "not-a-port"]).is_err());
    }
}
