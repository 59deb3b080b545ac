//! CDX Library
//!
//! Directory alias manager: binds short names to directories, persists
//! them in `~/.cdx_aliases.json` and opens them in the platform file
//! manager.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::{AliasStore, DirectoryOpener, SystemOpener};
pub use domain::alias::{AliasDocument, AliasRecord};
pub use domain::config::CdxConfig;
pub use domain::error::{CdxError, CdxResult};
