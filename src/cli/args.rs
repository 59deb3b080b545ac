use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments for CDX
#[derive(Parser, Debug)]
#[command(
    name = "cdx",
    version = env!("CARGO_PKG_VERSION"),
    about = "CDX - Directory alias manager",
    long_about = "CDX helps you manage directory aliases for quick navigation.\n\nRun `cdx <alias>` to open an aliased directory in the file manager."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Alias file path (defaults to ~/.cdx_aliases.json)
    #[arg(short = 'f', long, global = true)]
    pub alias_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Alias of the directory to open
    pub alias: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Set an alias for a directory path
    Set {
        /// Alias name
        alias: String,
        /// Directory the alias points to
        path: PathBuf,
    },
    /// Remove a directory alias
    Remove {
        /// Alias name
        alias: String,
    },
    /// List all directory aliases
    List,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

/// The single action a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Open { alias: String },
    Set { alias: String, path: PathBuf },
    Remove { alias: String },
    List,
}

impl Args {
    /// Parse a command line, rejecting an alias given together with a subcommand.
    ///
    /// Global options stay accepted on either side of the subcommand.
    pub fn try_parse_checked<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(argv)?;
        if let (Some(alias), Some(_)) = (&args.alias, &args.command) {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("the alias '{}' cannot be used with a subcommand", alias),
            ));
        }
        Ok(args)
    }

    pub fn invocation(&self) -> Invocation {
        match (&self.command, &self.alias) {
            (Some(Command::Set { alias, path }), _) => Invocation::Set {
                alias: alias.clone(),
                path: path.clone(),
            },
            (Some(Command::Remove { alias }), _) => Invocation::Remove {
                alias: alias.clone(),
            },
            (Some(Command::List), _) => Invocation::List,
            (None, Some(alias)) => Invocation::Open {
                alias: alias.clone(),
            },
            (None, None) => Invocation::Help,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
