//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/pacspace/config.toml` (or the platform-specific
//! equivalent). Both `pacremove` and `pacsize` read the same file. Values in it
//! serve as defaults that can be overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [environment]
//! path = "/usr/bin"
//! locale = "C"
//!
//! [removal]
//! use_sudo = true
//!
//! [profile]
//! target = "rocm-hip-sdk"
//! top = 10
//! opt_pattern = "^(rocm-|hip-|hsa-)"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use super::CommandEnv;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    /// Subprocess environment
    #[serde(default)]
    pub environment: FileEnvironmentConfig,

    /// Options for `pacremove`
    #[serde(default)]
    pub removal: FileRemovalConfig,

    /// Options for `pacsize`
    #[serde(default)]
    pub profile: FileProfileConfig,
}

/// Subprocess environment from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileEnvironmentConfig {
    /// Search path for the external tools (e.g., `"/usr/bin"`)
    pub path: Option<String>,

    /// Locale forced on the external tools (e.g., `"C"`)
    pub locale: Option<String>,
}

/// Removal options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileRemovalConfig {
    /// Whether to run the dry-run removal through `sudo`
    pub use_sudo: Option<bool>,
}

/// Profile options from the configuration file.
#[derive(Deserialize, Default, Debug)]
pub struct FileProfileConfig {
    /// Package whose dependency tree is profiled
    pub target: Option<String>,

    /// Number of packages in the ranked table
    pub top: Option<usize>,

    /// Regex matching packages installed under `/opt`
    pub opt_pattern: Option<String>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/pacspace/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pacspace").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or mistyped fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }

    /// Resolve the subprocess environment, falling back to the pinned defaults.
    #[must_use]
    pub fn command_env(&self) -> CommandEnv {
        let defaults = CommandEnv::default();

        CommandEnv {
            search_path: self
                .environment
                .path
                .clone()
                .unwrap_or(defaults.search_path),
            locale: self
                .environment
                .locale
                .clone()
                .unwrap_or(defaults.locale),
        }
    }
}

/// Load the configuration used by a command-line run.
///
/// An explicitly requested file must load cleanly. The implicit default file
/// falls back to defaults with a warning when it is malformed.
///
/// # Errors
///
/// Returns an error only when `explicit` is given and cannot be loaded.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    if let Some(path) = explicit {
        return FileConfig::load_from(path);
    }

    match FileConfig::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Failed to load config file: {e}");
            Ok(FileConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.environment.path.is_none());
        assert!(config.environment.locale.is_none());
        assert!(config.removal.use_sudo.is_none());
        assert!(config.profile.target.is_none());
        assert!(config.profile.top.is_none());
        assert!(config.profile.opt_pattern.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[environment]
path = "/usr/local/bin:/usr/bin"
locale = "C.UTF-8"

[removal]
use_sudo = false

[profile]
target = "cuda"
top = 25
opt_pattern = "^cuda"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(
            config.environment.path,
            Some("/usr/local/bin:/usr/bin".to_string())
        );
        assert_eq!(config.environment.locale, Some("C.UTF-8".to_string()));
        assert_eq!(config.removal.use_sudo, Some(false));
        assert_eq!(config.profile.target, Some("cuda".to_string()));
        assert_eq!(config.profile.top, Some(25));
        assert_eq!(config.profile.opt_pattern, Some("^cuda".to_string()));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r"
[removal]
use_sudo = false
";

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.removal.use_sudo, Some(false));
        assert!(config.environment.path.is_none());
        assert!(config.profile.target.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.environment.path.is_none());
        assert!(config.profile.top.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[profile]
top = "ten"
"#;
        let result = toml::from_str::<FileConfig>(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_env_defaults() {
        let env = FileConfig::default().command_env();
        assert_eq!(env, CommandEnv::default());
    }

    #[test]
    fn test_command_env_from_file() {
        let config: FileConfig = toml::from_str(
            r#"
[environment]
path = "/opt/tools/bin"
"#,
        )
        .unwrap();

        let env = config.command_env();
        assert_eq!(env.search_path, "/opt/tools/bin");
        assert_eq!(env.locale, "C");
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with("pacspace/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let result = FileConfig::load_from(Path::new("/nonexistent/pacspace/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_explicit_missing_file_errors() {
        assert!(load_config(Some(Path::new("/nonexistent/pacspace.toml"))).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\ntarget = \"hip-runtime-amd\"\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.profile.target, Some("hip-runtime-amd".to_string()));
    }

    #[test]
    fn test_load_from_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[removal\nuse_sudo = ").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
