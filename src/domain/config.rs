use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CDX configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdxConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Alias store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Directory browser settings
    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Alias store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Alias file location, overriding `~/.cdx_aliases.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_file: Option<PathBuf>,
}

/// Directory browser settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Program that opens a directory; the platform default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Arguments placed before the directory path
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}
