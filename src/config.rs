//! Configuration loading and reference database path resolution

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable consulted when no explicit path is given
pub const REFERENCE_DB_ENV_VAR: &str = "ECHOVAL_REFERENCE_DB";

/// Optional TOML configuration file (`~/.config/echoval/config.toml`)
///
/// Minimal by design: the engine's only bootstrap concern is where the
/// reference database lives. A missing or unreadable file is not an
/// error, resolution just moves on to the platform default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Path to the reference rate database
    #[serde(default)]
    pub reference_db: Option<PathBuf>,
}

/// Resolved engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path to the SQLite database holding the three reference tables
    pub reference_db: PathBuf,
}

impl EngineConfig {
    /// Resolve the reference database path in priority order:
    /// 1. Explicit caller argument (highest priority)
    /// 2. `ECHOVAL_REFERENCE_DB` environment variable
    /// 3. `reference_db` key in the TOML config file
    /// 4. OS-dependent compiled default (fallback)
    ///
    /// Resolution never fails; each absent or malformed source degrades
    /// to the next priority.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        EngineConfig {
            reference_db: resolve_reference_db(explicit),
        }
    }
}

/// Reference database path resolution (see [`EngineConfig::resolve`])
pub fn resolve_reference_db(explicit: Option<&Path>) -> PathBuf {
    // Priority 1: explicit caller argument
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    // Priority 2: environment variable
    if let Ok(path) = std::env::var(REFERENCE_DB_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(config) = read_config_file() {
        if let Some(path) = config.reference_db {
            return path;
        }
    }

    // Priority 4: OS-dependent compiled default
    default_reference_db()
}

/// Default configuration file path for the platform
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("echoval").join("config.toml"))
}

/// Read and parse the config file, if one exists and parses
fn read_config_file() -> Option<TomlConfig> {
    let path = config_file_path()?;
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Ignoring malformed config file");
            None
        }
    }
}

/// OS-dependent default reference database location
fn default_reference_db() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("echoval"))
        .unwrap_or_else(|| PathBuf::from("./echoval_data"))
        .join("reference.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_argument_is_used_verbatim() {
        let config = EngineConfig::resolve(Some(Path::new("/tmp/rates.db")));
        assert_eq!(config.reference_db, PathBuf::from("/tmp/rates.db"));
    }

    #[test]
    fn test_default_path_ends_with_reference_db() {
        let path = default_reference_db();
        assert!(path.ends_with("reference.db"));
        assert!(path.to_string_lossy().contains("echoval"));
    }

    #[test]
    fn test_toml_config_parses_reference_db_key() {
        let config: TomlConfig = toml::from_str(r#"reference_db = "/data/rates.db""#).unwrap();
        assert_eq!(config.reference_db, Some(PathBuf::from("/data/rates.db")));
    }

    #[test]
    fn test_toml_config_missing_key_is_none() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(config.reference_db, None);
    }

    #[test]
    fn test_toml_config_round_trip() {
        let config = TomlConfig {
            reference_db: Some(PathBuf::from("/data/rates.db")),
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: TomlConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.reference_db, config.reference_db);
    }
}
