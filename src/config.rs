//! Run configuration.
//!
//! Values are resolved in order: command-line flag, then the optional TOML
//! file passed with `--config`, then the built-in defaults for the Flutter
//! `Runner` project.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_MANIFEST_PATH: &str = "ios/Runner.xcodeproj/project.pbxproj";
pub const DEFAULT_ANCHOR_FILE_NAME: &str = "AppDelegate.swift";
pub const DEFAULT_TARGET_FILE_NAME: &str = "RoomOutlineExtractor.swift";

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub manifest_path: Option<PathBuf>,
    pub anchor_file_name: Option<String>,
    pub target_file_name: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings for one patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchConfig {
    pub manifest_path: PathBuf,
    pub anchor_file_name: String,
    pub target_file_name: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            anchor_file_name: DEFAULT_ANCHOR_FILE_NAME.to_string(),
            target_file_name: DEFAULT_TARGET_FILE_NAME.to_string(),
        }
    }
}

impl PatchConfig {
    /// Merges `overrides` (from flags) over `file` over the defaults, then validates.
    pub fn resolve(file: FileConfig, overrides: FileConfig) -> Result<PatchConfig, ConfigError> {
        let defaults = PatchConfig::default();
        let config = PatchConfig {
            manifest_path: overrides
                .manifest_path
                .or(file.manifest_path)
                .unwrap_or(defaults.manifest_path),
            anchor_file_name: overrides
                .anchor_file_name
                .or(file.anchor_file_name)
                .unwrap_or(defaults.anchor_file_name),
            target_file_name: overrides
                .target_file_name
                .or(file.target_file_name)
                .unwrap_or(defaults.target_file_name),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_path.as_os_str().is_empty() {
            return Err(ConfigError::Empty {
                field: "manifest_path",
            });
        }
        check_file_name("anchor_file_name", &self.anchor_file_name)?;
        check_file_name("target_file_name", &self.target_file_name)?;
        if self.anchor_file_name == self.target_file_name {
            return Err(ConfigError::SameFile(self.target_file_name.clone()));
        }
        Ok(())
    }

    /// Sibling path the original manifest is copied to before patching.
    pub fn backup_path(&self) -> PathBuf {
        let mut path = self.manifest_path.clone().into_os_string();
        path.push(".backup");
        PathBuf::from(path)
    }
}

// Names end up inside `/* ... */` comments and quoted `path = "...";` values.
fn check_file_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty { field });
    }
    let bad = value.contains(['/', '\\', '"', '\n', '\t', ';'])
        || value.contains("*/")
        || value.trim() != value;
    if bad {
        return Err(ConfigError::NotAFileName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
