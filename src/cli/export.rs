//! Data export commands
//!
//! Each format writes to the given file, or to stdout when none is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Transactions and budgets as JSON
    Json {
        /// Output file path
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Transactions (or budgets) as CSV
    Csv {
        /// Output file path
        output: Option<PathBuf>,

        /// Export budget goals instead of transactions
        #[arg(long)]
        budgets: bool,
    },

    /// Transactions and budgets as YAML
    Yaml {
        /// Output file path
        output: Option<PathBuf>,
    },
}

fn open_output(output: Option<&Path>) -> FinanceResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn finish(mut writer: Box<dyn Write>, output: Option<&Path>, what: &str) -> FinanceResult<()> {
    writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("Exported {} to: {}", what, path.display());
    }
    Ok(())
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinanceResult<()> {
    match cmd {
        ExportCommands::Json { output, pretty } => {
            let mut writer = open_output(output.as_deref())?;
            json::export_full_json(storage, &mut writer, pretty)?;
            if output.is_none() {
                writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
            }
            finish(writer, output.as_deref(), "full data")
        }

        ExportCommands::Csv { output, budgets } => {
            let mut writer = open_output(output.as_deref())?;
            if budgets {
                csv::export_budgets_csv(storage, &mut writer)?;
                finish(writer, output.as_deref(), "budgets")
            } else {
                csv::export_transactions_csv(storage, &mut writer)?;
                finish(writer, output.as_deref(), "transactions")
            }
        }

        ExportCommands::Yaml { output } => {
            let mut writer = open_output(output.as_deref())?;
            yaml::export_full_yaml(storage, &mut writer)?;
            finish(writer, output.as_deref(), "full data")
        }
    }
}
