// Core module - Alias store and directory launching
pub mod launcher;
pub mod store;

pub use launcher::{DirectoryOpener, SystemOpener};
pub use store::AliasStore;
