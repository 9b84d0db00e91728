//! Run configuration.
//!
//! Settings come from three layers, highest priority first:
//!
//! 1. command-line flags
//! 2. an optional TOML file passed with `--config`
//! 3. stock defaults
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//! dir = "/tmp/small"   # Destination directory
//! size = "medium"      # small | medium | large (prefixes allowed) or WxH
//! verbose = false      # Log progress to stderr
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! The layers are merged into a [`FileConfig`], which is then turned into the
//! immutable [`RunConfig`] exactly once. That is also where the size token is
//! resolved, so a bad `size` fails before any file is touched.

use crate::size::{self, SizeError};
use crate::types::Dimensions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DIR: &str = "/tmp/small";
pub const DEFAULT_SIZE: &str = "medium";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Size(#[from] SizeError),
}

/// Unresolved settings as written in a config file or on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Destination directory.
    pub dir: PathBuf,
    /// Size token, resolved by [`size::resolve`].
    pub size: String,
    /// Log progress to stderr.
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            size: DEFAULT_SIZE.to_string(),
            verbose: false,
        }
    }
}

/// Values given explicitly on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub size: Option<String>,
    pub verbose: bool,
}

impl FileConfig {
    /// Apply command-line overrides on top of this config.
    ///
    /// `verbose` can only be switched on from the command line, never off.
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            dir: overrides.dir.unwrap_or(self.dir),
            size: overrides.size.unwrap_or(self.size),
            verbose: self.verbose || overrides.verbose,
        }
    }

    /// Resolve the size token and freeze the result.
    pub fn into_run_config(self) -> Result<RunConfig, ConfigError> {
        let bounds = size::resolve(&self.size)?;
        Ok(RunConfig {
            dest_dir: self.dir,
            bounds,
            verbose: self.verbose,
        })
    }
}

/// Fully resolved, immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dest_dir: PathBuf,
    pub bounds: Dimensions,
    pub verbose: bool,
}

/// Load a config file. `None` yields the stock defaults.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Stock defaults + optional file + command-line overrides → [`RunConfig`].
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<RunConfig, ConfigError> {
    load_config(path)?.with_overrides(overrides).into_run_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_flag_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.dir, PathBuf::from("/tmp/small"));
        assert_eq!(config.size, "medium");
        assert!(!config.verbose);
    }

    #[test]
    fn default_run_config_is_medium() {
        let run = FileConfig::default().into_run_config().unwrap();
        assert_eq!(run.bounds, Dimensions::new(640, 480));
        assert_eq!(run.dest_dir, PathBuf::from("/tmp/small"));
    }

    #[test]
    fn parse_partial_config() {
        let config: FileConfig = toml::from_str(r#"size = "large""#).unwrap();
        assert_eq!(config.size, "large");
        // Unspecified values should be defaults
        assert_eq!(config.dir, PathBuf::from("/tmp/small"));
        assert!(!config.verbose);
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<FileConfig, _> = toml::from_str(r#"quality = 90"#);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_win_over_file() {
        let file = FileConfig {
            dir: "/srv/out".into(),
            size: "small".into(),
            verbose: false,
        };
        let merged = file.with_overrides(Overrides {
            dir: None,
            size: Some("100x100".into()),
            verbose: true,
        });
        assert_eq!(merged.dir, PathBuf::from("/srv/out"));
        assert_eq!(merged.size, "100x100");
        assert!(merged.verbose);
    }

    #[test]
    fn verbose_from_file_survives_missing_flag() {
        let file = FileConfig {
            verbose: true,
            ..FileConfig::default()
        };
        assert!(file.with_overrides(Overrides::default()).verbose);
    }

    #[test]
    fn bad_size_surfaces_as_size_error() {
        let config = FileConfig {
            size: "huge".into(),
            ..FileConfig::default()
        };
        let err = config.into_run_config().unwrap_err();
        assert!(matches!(err, ConfigError::Size(SizeError::InvalidSizeSpec(ref t)) if t == "huge"));
        assert_eq!(err.to_string(), "invalid size spec: \"huge\"");
    }

    #[test]
    fn load_config_without_path_is_default() {
        assert_eq!(load_config(None).unwrap(), FileConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resimg.toml");
        fs::write(
            &path,
            r#"
dir = "/home/me/mail"
size = "s"
verbose = true
"#,
        )
        .unwrap();

        let run = resolve_config(Some(&path), Overrides::default()).unwrap();
        assert_eq!(run.dest_dir, PathBuf::from("/home/me/mail"));
        assert_eq!(run.bounds, Dimensions::new(320, 240));
        assert!(run.verbose);
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(Some(&tmp.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resimg.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
