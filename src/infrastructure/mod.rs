// Infrastructure module - External dependencies and adapters
pub mod alias_file;
pub mod config;
pub mod logging;
