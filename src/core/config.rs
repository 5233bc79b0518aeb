//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gridform/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GridformConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub schema_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub sheet_name: Option<String>,
    pub column_width: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SCHEMA_PATH: &str = "form_schema.json";
pub const DEFAULT_SHEET_NAME: &str = "Records";
pub const DEFAULT_COLUMN_WIDTH: f64 = 20.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub schema_path: PathBuf,
    pub sheet_name: String,
    pub column_width: f64,
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

/// Returns the path to `~/.gridform/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gridform").join("config.toml"))
}

/// Load config from `~/.gridform/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GridformConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GridformConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GridformConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GridformConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GridformConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Gridform Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# schema_path = "form_schema.json"   # Or set GRIDFORM_SCHEMA env var

# [export]
# sheet_name = "Records"             # Worksheet name in exported workbooks
# column_width = 20.0                # Column width in exported workbooks
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_schema` comes from the `--schema` flag (None = not specified).
pub fn resolve(config: &GridformConfig, cli_schema: Option<&Path>) -> ResolvedConfig {
    // Schema path: CLI → env → config → default
    let schema_path = cli_schema
        .map(|p| p.to_path_buf())
        .or_else(|| std::env::var("GRIDFORM_SCHEMA").ok().map(PathBuf::from))
        .or_else(|| config.general.schema_path.clone().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));

    ResolvedConfig {
        schema_path,
        sheet_name: config
            .export
            .sheet_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
        column_width: config.export.column_width.unwrap_or(DEFAULT_COLUMN_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GridformConfig::default();
        assert!(config.general.schema_path.is_none());
        assert!(config.export.sheet_name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = GridformConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.schema_path, PathBuf::from(DEFAULT_SCHEMA_PATH));
        assert_eq!(resolved.sheet_name, DEFAULT_SHEET_NAME);
        assert_eq!(resolved.column_width, DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GridformConfig {
            general: GeneralConfig {
                schema_path: Some("custom_schema.json".to_string()),
            },
            export: ExportConfig {
                sheet_name: Some("Inventory".to_string()),
                column_width: Some(32.0),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.schema_path, PathBuf::from("custom_schema.json"));
        assert_eq!(resolved.sheet_name, "Inventory");
        assert_eq!(resolved.column_width, 32.0);
    }

    #[test]
    fn test_resolve_cli_schema_wins() {
        let config = GridformConfig {
            general: GeneralConfig {
                schema_path: Some("from_config.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("from_cli.json")));
        assert_eq!(resolved.schema_path, PathBuf::from("from_cli.json"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[export]
sheet_name = "Products"
"#;
        let config: GridformConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.export.sheet_name.as_deref(), Some("Products"));
        assert!(config.export.column_width.is_none());
        assert!(config.general.schema_path.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
schema_path = "inventory_schema.json"

[export]
sheet_name = "Inventory"
column_width = 24.0
"#;
        let config: GridformConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.schema_path.as_deref(),
            Some("inventory_schema.json")
        );
        assert_eq!(config.export.sheet_name.as_deref(), Some("Inventory"));
        assert_eq!(config.export.column_width, Some(24.0));
    }
}
