use crate::domain::alias::AliasDocument;
use crate::domain::error::{CdxError, CdxResult};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the alias document inside the user's home directory
pub const ALIAS_FILE_NAME: &str = ".cdx_aliases.json";

/// Default alias file location: `<home>/.cdx_aliases.json`
pub fn default_alias_file() -> CdxResult<PathBuf> {
    let home = dirs::home_dir().ok_or(CdxError::HomeDirUnavailable)?;
    Ok(home.join(ALIAS_FILE_NAME))
}

/// Read the alias document. `Ok(None)` when the file does not exist.
pub fn read_document(path: &Path) -> CdxResult<Option<AliasDocument>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(CdxError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| CdxError::LoadParse {
            path: path.to_path_buf(),
            source,
        })
}

/// Replace the alias document on disk.
///
/// The document is written to a temporary file in the same directory and
/// renamed over `path`, so readers see either the old or the new content.
pub fn write_document(path: &Path, document: &AliasDocument) -> CdxResult<()> {
    let persist_err = |source: io::Error| CdxError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let content =
        serde_json::to_string_pretty(document).map_err(|e| persist_err(io::Error::other(e)))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(persist_err)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(persist_err)?;
    temp.write_all(content.as_bytes()).map_err(persist_err)?;
    temp.as_file().sync_all().map_err(persist_err)?;
    temp.persist(path).map_err(|e| persist_err(e.error))?;

    tracing::debug!("Wrote {} aliases to {}", document.paths.len(), path.display());
    Ok(())
}
