use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Section;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("{} not found", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not find {anchor} in the {section} section")]
    AnchorNotFound { section: Section, anchor: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a bare file name, got {value:?}")]
    NotAFileName { field: &'static str, value: String },

    #[error("anchor and target are both {0:?}")]
    SameFile(String),
}
