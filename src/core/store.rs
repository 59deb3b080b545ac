use crate::domain::alias::{AliasDocument, AliasRecord};
use crate::domain::error::{CdxError, CdxResult};
use crate::infrastructure::alias_file;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Alias → directory mapping backed by a single JSON document
///
/// Every successful mutation rewrites the whole document. A failed write
/// does not undo the in-memory change.
#[derive(Debug)]
pub struct AliasStore {
    /// Location of the alias document
    path: PathBuf,
    /// Aliases, ordered by name
    aliases: BTreeMap<String, PathBuf>,
}

impl AliasStore {
    /// Create an empty store bound to `path`; nothing is read yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            aliases: BTreeMap::new(),
        }
    }

    /// Populate the store from disk.
    ///
    /// A missing file is the first-run state and yields `Ok(0)`. On a read or
    /// parse failure the store is left empty and the error is returned for
    /// the caller to report.
    pub fn load(&mut self) -> CdxResult<usize> {
        self.aliases.clear();

        match alias_file::read_document(&self.path)? {
            Some(document) => {
                self.aliases = document.paths;
                debug!("Loaded {} aliases from {}", self.aliases.len(), self.path.display());
            }
            None => debug!("No alias file at {}", self.path.display()),
        }

        Ok(self.aliases.len())
    }

    /// Write the full mapping to disk
    pub fn save(&self) -> CdxResult<()> {
        let document = AliasDocument {
            paths: self.aliases.clone(),
        };
        alias_file::write_document(&self.path, &document)
    }

    /// Bind `alias` to the directory at `raw_path`, overwriting any previous binding.
    ///
    /// Returns the absolute path that was stored.
    pub fn set(&mut self, alias: &str, raw_path: &Path) -> CdxResult<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| CdxError::InvalidPath {
            path: raw_path.to_path_buf(),
            reason: format!("cannot determine current directory: {}", e),
        })?;
        let resolved = absolutize(raw_path, &cwd);

        match fs::metadata(&resolved) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                return Err(CdxError::InvalidPath {
                    path: raw_path.to_path_buf(),
                    reason: "not a directory".to_string(),
                })
            }
            Err(e) => {
                return Err(CdxError::InvalidPath {
                    path: raw_path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        }

        if let Some(previous) = self.aliases.insert(alias.to_string(), resolved.clone()) {
            debug!("Overwriting alias '{}' (was {})", alias, previous.display());
        }
        self.save()?;

        info!("Set alias '{}' to {}", alias, resolved.display());
        Ok(resolved)
    }

    /// Delete `alias`, returning the path it pointed to
    pub fn remove(&mut self, alias: &str) -> CdxResult<PathBuf> {
        let removed = self.aliases.remove(alias).ok_or_else(|| CdxError::NotFound {
            alias: alias.to_string(),
        })?;
        self.save()?;

        info!("Removed alias '{}'", alias);
        Ok(removed)
    }

    /// All aliases, sorted by name
    pub fn list(&self) -> Vec<AliasRecord> {
        self.aliases
            .iter()
            .map(|(alias, path)| AliasRecord::new(alias.clone(), path.clone()))
            .collect()
    }

    /// Path currently bound to `alias`
    pub fn resolve(&self, alias: &str) -> CdxResult<&Path> {
        self.aliases
            .get(alias)
            .map(PathBuf::as_path)
            .ok_or_else(|| CdxError::NotFound {
                alias: alias.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Location of the alias document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Make `raw` absolute against `base` and fold `.` and `..` lexically.
///
/// Symlinks are left alone; `..` at the root stays at the root.
pub fn absolutize(raw: &Path, base: &Path) -> PathBuf {
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        base.join(raw)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> AliasStore {
        AliasStore::new(temp_dir.path().join("aliases.json"))
    }

    #[test]
    fn test_absolutize_relative() {
        assert_eq!(absolutize(Path::new("."), Path::new("/x/y")), PathBuf::from("/x/y"));
        assert_eq!(absolutize(Path::new("z/../w"), Path::new("/x/y")), PathBuf::from("/x/y/w"));
        assert_eq!(absolutize(Path::new(".."), Path::new("/x/y")), PathBuf::from("/x"));
    }

    #[test]
    fn test_absolutize_absolute() {
        assert_eq!(absolutize(Path::new("/a/./b/"), Path::new("/x")), PathBuf::from("/a/b"));
        assert_eq!(absolutize(Path::new("/../.."), Path::new("/x")), PathBuf::from("/"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        assert_eq!(store.load().unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupted_file_leaves_store_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        fs::write(store.path(), "{\"paths\": 42}").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, CdxError::LoadParse { .. }));
        assert!(err.is_recoverable_load());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_and_resolve() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("proj");
        fs::create_dir(&target).unwrap();

        let mut store = store_in(&temp_dir);
        let stored = store.set("proj", &target).unwrap();

        assert_eq!(stored, target);
        assert_eq!(store.resolve("proj").unwrap(), target.as_path());
        assert!(store.path().exists());
    }

    #[test]
    fn test_set_twice_keeps_one_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();

        let mut store = store_in(&temp_dir);
        store.set("a", &first).unwrap();
        store.set("a", &second).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve("a").unwrap(), second.as_path());
    }

    #[test]
    fn test_set_rejects_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        let err = store.set("nope", &temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, CdxError::InvalidPath { .. }));
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let mut store = store_in(&temp_dir);
        let err = store.set("file", &file).unwrap_err();
        assert!(matches!(err, CdxError::InvalidPath { .. }));
        assert!(store.resolve("file").is_err());
    }

    #[test]
    fn test_set_persist_failure_keeps_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        // Parent of the alias file is a regular file, so every write fails
        let mut store = AliasStore::new(blocker.join("aliases.json"));
        let err = store.set("tmp", temp_dir.path()).unwrap_err();

        assert!(matches!(err, CdxError::Persist { .. }));
        assert_eq!(store.resolve("tmp").unwrap(), temp_dir.path());
    }

    #[test]
    fn test_remove_persist_failure_keeps_deletion() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.set("gone", temp_dir.path()).unwrap();

        let mut loaded = store_in(&temp_dir);
        assert_eq!(loaded.load().unwrap(), 1);

        // A non-empty directory in place of the alias file cannot be renamed over
        fs::remove_file(loaded.path()).unwrap();
        fs::create_dir(loaded.path()).unwrap();
        fs::write(loaded.path().join("occupied"), "x").unwrap();

        let err = loaded.remove("gone").unwrap_err();
        assert!(matches!(err, CdxError::Persist { .. }));
        assert!(matches!(loaded.resolve("gone"), Err(CdxError::NotFound { .. })));
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.set("here", temp_dir.path()).unwrap();

        assert_eq!(store.remove("here").unwrap(), temp_dir.path());
        assert!(store.is_empty());

        let err = store.remove("here").unwrap_err();
        assert!(matches!(err, CdxError::NotFound { .. }));
    }

    #[test]
    fn test_remove_missing_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        assert!(store.remove("ghost").is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_list_sorted_by_alias() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        for alias in ["zeta", "alpha", "mid"] {
            store.set(alias, temp_dir.path()).unwrap();
        }

        let names: Vec<String> = store.list().into_iter().map(|r| r.alias).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);
        store.set("root", temp_dir.path()).unwrap();

        let mut reloaded = store_in(&temp_dir);
        assert_eq!(reloaded.load().unwrap(), 1);
        assert_eq!(reloaded.resolve("root").unwrap(), temp_dir.path());
    }
}
