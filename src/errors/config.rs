// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading bridge options from disk
#[derive(Debug)]
pub enum ConfigError {
    /// The options file could not be read
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid YAML for the options schema
    Yaml(serde_yaml::Error),
    /// The file is not valid TOML for the options schema
    Toml(toml::de::Error),
    /// The file extension is neither YAML nor TOML
    UnsupportedFormat {
        /// Path whose extension was not recognised
        path: PathBuf,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read options file '{}': {}", path.display(), source)
            }
            ConfigError::Yaml(err) => write!(f, "Invalid YAML options: {}", err),
            ConfigError::Toml(err) => write!(f, "Invalid TOML options: {}", err),
            ConfigError::UnsupportedFormat { path } => write!(
                f,
                "Unsupported options format for '{}': expected .yaml, .yml or .toml",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Yaml(err) => Some(err),
            ConfigError::Toml(err) => Some(err),
            ConfigError::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}
