// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::codec::{EmulationFlags, Verbosity};
use crate::config::consts::{
    DEFAULT_REMOTE_TIMEOUT_SECONDS, MAX_REMOTE_TIMEOUT_SECONDS, MIN_REMOTE_TIMEOUT_SECONDS,
};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Instance-wide defaults for a bridge.
///
/// Per-call arguments override these where both exist. Every field has a
/// default, so an empty file is a valid options file.
///
/// # Example
/// ```yaml
/// verbosity: vm_logs_gas
/// debug_enabled: true
/// flags:
///   full_body_in_bounced: false
/// remote:
///   endpoint: "https://node.example/jsonRPC"
///   timeout_seconds: 5
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeOptions {
    pub verbosity: Verbosity,
    pub debug_enabled: bool,
    pub flags: EmulationFlags,
    pub remote: RemoteConfig,
}

/// Account-state lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// JSON-RPC endpoint; lookups are unavailable when unset.
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: DEFAULT_REMOTE_TIMEOUT_SECONDS,
        }
    }
}

impl RemoteConfig {
    /// Request timeout, clamped to the supported range.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_seconds
                .clamp(MIN_REMOTE_TIMEOUT_SECONDS, MAX_REMOTE_TIMEOUT_SECONDS),
        )
    }
}

/// Load options from a `.yaml`/`.yml` or `.toml` file.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<BridgeOptions, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            let content = read(path)?;
            // An empty YAML document deserializes as unit, not as an empty map.
            if content.trim().is_empty() {
                return Ok(BridgeOptions::default());
            }
            Ok(serde_yaml::from_str(&content)?)
        }
        Some("toml") => Ok(toml::from_str(&read(path)?)?),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn options_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let options = BridgeOptions::default();
        assert_eq!(options.verbosity, Verbosity::None);
        assert!(!options.debug_enabled);
        assert_eq!(options.flags, EmulationFlags::default());
        assert_eq!(options.remote.endpoint, None);
        assert_eq!(options.remote.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_load_yaml_options() {
        let file = options_file(
            ".yaml",
            r#"
verbosity: vm_logs_full
debug_enabled: true
flags:
  charge_action_fees_on_fail: false
remote:
  endpoint: "http://localhost:8081/jsonRPC"
"#,
        );

        let options = load_options(file.path()).unwrap();

        assert_eq!(options.verbosity, Verbosity::VmLogsFull);
        assert!(options.debug_enabled);
        assert_eq!(options.flags.charge_action_fees_on_fail, Some(false));
        // Unset flags stay unset and are left to the engine.
        assert_eq!(options.flags.disable_delete_frozen_accounts, None);
        assert_eq!(
            options.remote.endpoint.as_deref(),
            Some("http://localhost:8081/jsonRPC")
        );
        assert_eq!(options.remote.timeout_seconds, DEFAULT_REMOTE_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_load_toml_options() {
        let file = options_file(
            ".toml",
            r#"
verbosity = "vm_logs"

[remote]
timeout_seconds = 30
"#,
        );

        let options = load_options(file.path()).unwrap();

        assert_eq!(options.verbosity, Verbosity::VmLogs);
        assert_eq!(options.remote.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let file = options_file(".yml", "");
        assert_eq!(load_options(file.path()).unwrap(), BridgeOptions::default());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = options_file(".json", "{}");
        assert!(matches!(
            load_options(file.path()),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_reports_yaml_error() {
        let file = options_file(".yaml", "verbosity: loudest\n");
        assert!(matches!(load_options(file.path()), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_options("/nonexistent/bridge.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/bridge.yaml"));
    }

    #[test]
    fn test_timeout_is_clamped() {
        let remote = RemoteConfig {
            endpoint: None,
            timeout_seconds: 0,
        };
        assert_eq!(remote.timeout(), Duration::from_secs(MIN_REMOTE_TIMEOUT_SECONDS));

        let remote = RemoteConfig {
            endpoint: None,
            timeout_seconds: 10_000,
        };
        assert_eq!(remote.timeout(), Duration::from_secs(MAX_REMOTE_TIMEOUT_SECONDS));
    }
}
