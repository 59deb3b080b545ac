// Domain module - Shared types, configuration and errors
pub mod alias;
pub mod config;
pub mod error;
