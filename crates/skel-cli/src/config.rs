//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SKEL_TOOLS__GO_BINARY=go1.22`)
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use skel_adapters::module_tool::DEFAULT_GO_BINARY;

/// Keys understood by `skel config get`.
pub const KNOWN_KEYS: &[&str] = &[
    "output.no_color",
    "skeletons.local_path",
    "tools.go_binary",
    "tools.timeout_secs",
];

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Where skeletons come from.
    pub skeletons: SkeletonConfig,
    /// External tool settings.
    pub tools: ToolConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonConfig {
    /// Directory of user skeletons; replaces the built-in set when present.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub go_binary: String,
    /// Kill the module tool after this many seconds. Unset means no limit.
    pub timeout_secs: Option<u64>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            go_binary: DEFAULT_GO_BINARY.into(),
            timeout_secs: None,
        }
    }
}

impl ToolConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file and the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        Self::load_from(&path, required, Environment::with_prefix("SKEL"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("failed to serialise built-in configuration defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.skel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "skel", "skel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".skel.toml"))
    }

    /// Look up a single value by dotted key. Unset optional values render as
    /// an empty string; unknown keys yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "output.no_color" => self.output.no_color.to_string(),
            "skeletons.local_path" => self
                .skeletons
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "tools.go_binary" => self.tools.go_binary.clone(),
            "tools.timeout_secs" => self
                .tools
                .timeout_secs
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn isolated_env() -> Environment {
        Environment::with_prefix("SKEL_CONFIG_TEST_UNUSED")
    }

    #[test]
    fn defaults_use_go_without_timeout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.tools.go_binary, "go");
        assert!(cfg.tools.timeout().is_none());
        assert!(!cfg.output.no_color);
        assert!(cfg.skeletons.local_path.is_none());
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg =
            AppConfig::load_from(&dir.path().join("absent.toml"), false, isolated_env()).unwrap();
        assert_eq!(cfg.tools.go_binary, "go");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("absent.toml"), true, isolated_env());
        assert!(result.is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[tools]\ngo_binary = \"/opt/go/bin/go\"\ntimeout_secs = 90\n\n[skeletons]\nlocal_path = \"/srv/skeletons\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, isolated_env()).unwrap();
        assert_eq!(cfg.tools.go_binary, "/opt/go/bin/go");
        assert_eq!(cfg.tools.timeout(), Some(Duration::from_secs(90)));
        assert_eq!(
            cfg.skeletons.local_path.as_deref(),
            Some(Path::new("/srv/skeletons"))
        );
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[tools\ngo_binary = ").unwrap();
        assert!(AppConfig::load_from(&path, true, isolated_env()).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let mut cfg = AppConfig::default();
        cfg.tools.timeout_secs = Some(5);

        assert_eq!(cfg.get("tools.go_binary").as_deref(), Some("go"));
        assert_eq!(cfg.get("tools.timeout_secs").as_deref(), Some("5"));
        assert_eq!(cfg.get("skeletons.local_path").as_deref(), Some(""));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert!(cfg.get("tools.nope").is_none());
    }

    #[test]
    fn every_known_key_resolves() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(cfg.get(key).is_some(), "{key} should resolve");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
