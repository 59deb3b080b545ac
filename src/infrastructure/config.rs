use crate::domain::{config::CdxConfig, error::{CdxError, CdxResult}};
use crate::infrastructure::alias_file;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create configuration manager for the per-user config file
    pub fn new() -> CdxResult<Self> {
        Ok(Self {
            config_path: Self::get_global_config_path()?,
        })
    }

    /// Create configuration manager for an explicit config file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_config(&self) -> CdxResult<CdxConfig> {
        if !self.config_path.exists() {
            return Ok(CdxConfig::default());
        }
        self.load_config_from_path(&self.config_path)
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> CdxResult<CdxConfig> {
        let content = fs::read_to_string(path).map_err(|e| CdxError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| CdxError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Alias file location: explicit override, then config, then `~/.cdx_aliases.json`
    pub fn resolve_alias_file(
        &self,
        config: &CdxConfig,
        override_path: Option<&Path>,
    ) -> CdxResult<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &config.store.alias_file {
            return Ok(path.clone());
        }
        alias_file::default_alias_file()
    }

    /// Get global configuration path
    fn get_global_config_path() -> CdxResult<PathBuf> {
        let home = dirs::home_dir().ok_or(CdxError::HomeDirUnavailable)?;
        Ok(home.join(".config").join("cdx").join("config.toml"))
    }

    /// Get the config path in use
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
