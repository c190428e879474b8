//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hanyi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HanyiConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub check_health: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/translate";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub check_health: bool,
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_health_check: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.hanyi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hanyi").join("config.toml"))
}

/// Load config from `~/.hanyi/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HanyiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HanyiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HanyiConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<HanyiConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(HanyiConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HanyiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# hanyi configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# endpoint = "http://localhost:8000/translate"   # Or set HANYI_ENDPOINT
# timeout_secs = 30                              # Or set HANYI_TIMEOUT_SECS
# check_health = true                            # GET /health on startup
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HanyiConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &HanyiConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .clone()
        .or_else(|| env("HANYI_ENDPOINT"))
        .or_else(|| config.service.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Timeout: CLI → env → config → default
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            env("HANYI_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    warn!("Ignoring HANYI_TIMEOUT_SECS={:?}: {}", raw, e);
                    None
                }
            })
        })
        .or(config.service.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let check_health = !cli.no_health_check && config.service.check_health.unwrap_or(true);

    ResolvedConfig {
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
        check_health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&HanyiConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(resolved.check_health);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = HanyiConfig {
            service: ServiceConfig {
                endpoint: Some("http://10.0.0.2:9000/translate".to_string()),
                timeout_secs: Some(5),
                check_health: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.endpoint, "http://10.0.0.2:9000/translate");
        assert_eq!(resolved.timeout, Duration::from_secs(5));
        assert!(!resolved.check_health);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = HanyiConfig {
            service: ServiceConfig {
                endpoint: Some("http://from-file/translate".to_string()),
                timeout_secs: Some(5),
                check_health: None,
            },
        };
        let env = |key: &str| match key {
            "HANYI_ENDPOINT" => Some("http://from-env/translate".to_string()),
            "HANYI_TIMEOUT_SECS" => Some("12".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.endpoint, "http://from-env/translate");
        assert_eq!(resolved.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_env_timeout_falls_through() {
        let env = |key: &str| (key == "HANYI_TIMEOUT_SECS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&HanyiConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_cli_wins() {
        let cli = CliOverrides {
            endpoint: Some("http://from-cli/translate".to_string()),
            timeout_secs: Some(3),
            no_health_check: true,
        };
        let env = |key: &str| (key == "HANYI_ENDPOINT").then(|| "http://from-env/translate".to_string());
        let resolved = resolve_with_env(&HanyiConfig::default(), &cli, env);
        assert_eq!(resolved.endpoint, "http://from-cli/translate");
        assert_eq!(resolved.timeout, Duration::from_secs(3));
        assert!(!resolved.check_health);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[service]
timeout_secs = 10
"#;
        let config: HanyiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.timeout_secs, Some(10));
        assert!(config.service.endpoint.is_none());
        assert!(config.service.check_health.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: HanyiConfig = toml::from_str("").unwrap();
        assert!(config.service.endpoint.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: HanyiConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.service.endpoint.is_none());
    }

    #[test]
    fn test_load_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("hanyi-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.service.endpoint.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("hanyi-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[service\nendpoint = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
