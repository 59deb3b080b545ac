use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single alias binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    /// Alias name
    pub alias: String,
    /// Absolute directory path
    pub path: PathBuf,
}

impl AliasRecord {
    pub fn new(alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
        }
    }
}

/// On-disk shape of the alias file: `{"paths": {"<alias>": "<path>"}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDocument {
    #[serde(default)]
    pub paths: BTreeMap<String, PathBuf>,
}
