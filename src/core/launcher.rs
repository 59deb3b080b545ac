use crate::domain::config::LauncherConfig;
use crate::domain::error::{CdxError, CdxResult};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Something that can show a directory to the user
pub trait DirectoryOpener {
    fn open(&self, path: &Path) -> CdxResult<()>;
}

/// Platform directory browser, started detached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from configuration, using the host's browser when no program is set
    pub fn from_config(config: &LauncherConfig) -> Self {
        let program = config
            .program
            .clone()
            .unwrap_or_else(|| default_program().to_string());
        Self::new(program, config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new(default_program(), Vec::new())
    }
}

impl DirectoryOpener for SystemOpener {
    fn open(&self, path: &Path) -> CdxResult<()> {
        // The child is not waited on; its exit status is not our concern.
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| CdxError::Launch {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Started {} (pid {}) for {}", self.program, child.id(), path.display());
        Ok(())
    }
}

/// Directory browser program for the host OS
pub fn default_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer.exe"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}
