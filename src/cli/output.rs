use crate::cli::args::OutputFormat;
use crate::domain::alias::AliasRecord;
use tabled::{Table, Tabled};

/// Shown by `list` when the store is empty
pub const NO_ALIASES: &str = "No aliases set";

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_aliases(&self, aliases: &[AliasRecord]) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<OutputError> for crate::domain::error::CdxError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_aliases(&self, aliases: &[AliasRecord]) -> Result<(), OutputError> {
        println!("{}", render_aliases(self.format, aliases)?);
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        println!("{}", render_message(self.format, message)?);
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        eprintln!("{}", render_error(self.format, error)?);
        Ok(())
    }
}

/// Render an alias listing
pub fn render_aliases(
    format: OutputFormat,
    aliases: &[AliasRecord],
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(aliases)?),
        _ if aliases.is_empty() => Ok(NO_ALIASES.to_string()),
        OutputFormat::Text => {
            let mut lines = vec!["Directory Aliases:".to_string()];
            lines.extend(
                aliases
                    .iter()
                    .map(|record| format!("  {} -> {}", record.alias, record.path.display())),
            );
            Ok(lines.join("\n"))
        }
        OutputFormat::Table => {
            let rows: Vec<AliasTableRow> = aliases.iter().map(AliasTableRow::from).collect();
            Ok(Table::new(rows).to_string())
        }
    }
}

fn render_message(format: OutputFormat, message: &str) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "message": message,
                "level": "info"
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        _ => Ok(message.to_string()),
    }
}

fn render_error(format: OutputFormat, error: &str) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "error": error,
                "level": "error"
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        _ => Ok(format!("Error: {}", error)),
    }
}

/// Table row for an alias
#[derive(Tabled)]
struct AliasTableRow {
    alias: String,
    path: String,
}

impl From<&AliasRecord> for AliasTableRow {
    fn from(record: &AliasRecord) -> Self {
        Self {
            alias: record.alias.clone(),
            path: record.path.display().to_string(),
        }
    }
}
