use crate::cli::args::{Args, Invocation};
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::{AliasStore, DirectoryOpener, SystemOpener};
use crate::domain::error::{CdxError, CdxResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use clap::CommandFactory;
use std::process::ExitCode;
use tracing::debug;

/// Execute CLI command
///
/// Returns the process exit status. `Err` is reserved for failures that
/// happen before a command can run (configuration, home directory).
pub fn execute_command(args: Args) -> CdxResult<ExitCode> {
    let writer = ConsoleWriter::new(args.output);

    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let config = if args.config.is_some() {
        config_manager.load_config_from_path(config_manager.config_path())?
    } else {
        config_manager.load_config()?
    };

    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose).map_err(|e| CdxError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;
    }

    let alias_file = config_manager.resolve_alias_file(&config, args.alias_file.as_deref())?;
    let mut store = AliasStore::new(alias_file);
    match store.load() {
        Ok(count) => debug!("{} aliases available", count),
        Err(e) if e.is_recoverable_load() => {
            debug!("Continuing with an empty alias store: {}", e);
            writer.write_error(&e.to_string())?;
        }
        Err(e) => return Err(e),
    }

    let opener = SystemOpener::from_config(&config.launcher);

    match run_command(args.invocation(), &mut store, &opener, &writer) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            writer.write_error(&e.to_string())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run one invocation against a loaded store.
///
/// Only `open` failures are returned as errors; `set` and `remove` report
/// their problems and still succeed.
pub fn run_command(
    invocation: Invocation,
    store: &mut AliasStore,
    opener: &dyn DirectoryOpener,
    writer: &dyn OutputWriter,
) -> CdxResult<()> {
    match invocation {
        Invocation::Help => {
            writer.write_message(Args::command().render_long_help().to_string().trim_end())?;
        }
        Invocation::Open { alias } => {
            let path = store.resolve(&alias)?;
            debug!("Opening alias '{}' at {}", alias, path.display());
            opener.open(path)?;
        }
        Invocation::Set { alias, path } => match store.set(&alias, &path) {
            Ok(resolved) => {
                let message = format!("Set alias '{}' to '{}'", alias, resolved.display());
                writer.write_message(&message)?;
            }
            Err(e) => {
                debug!("set '{}' failed: {}", alias, e);
                writer.write_error(&e.to_string())?;
            }
        },
        Invocation::Remove { alias } => match store.remove(&alias) {
            Ok(_) => writer.write_message(&format!("Removed alias '{}'", alias))?,
            Err(CdxError::NotFound { .. }) => {
                writer.write_message(&format!("Alias '{}' does not exist", alias))?;
            }
            Err(e) => {
                debug!("remove '{}' failed: {}", alias, e);
                writer.write_error(&e.to_string())?;
            }
        },
        Invocation::List => writer.write_aliases(&store.list())?,
    }
    Ok(())
}
