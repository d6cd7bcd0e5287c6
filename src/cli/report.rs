//! CLI commands for reports
//!
//! Bridges clap argument parsing with the ledger reader, the analyzer,
//! and the report layer.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_health_colored, format_money_colored};
use crate::display::transaction::format_transaction_register;
use crate::error::{FiscalError, FiscalResult};
use crate::models::Transaction;
use crate::reports::SummaryReport;
use crate::services::{Analyzer, LedgerFormat, LedgerReader};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Print the full financial summary for a ledger
    Summary {
        /// Path to the ledger CSV
        file: PathBuf,

        /// Export to a file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export as JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Print profit and the health classification only
    Health {
        /// Path to the ledger CSV
        file: PathBuf,
    },

    /// Print the parsed transaction register
    #[command(alias = "register")]
    Transactions {
        /// Path to the ledger CSV
        file: PathBuf,

        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle report commands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> FiscalResult<()> {
    match cmd {
        ReportCommands::Summary { file, output, json } => {
            handle_summary(settings, &file, output, json)
        }
        ReportCommands::Health { file } => handle_health(settings, &file),
        ReportCommands::Transactions { file, limit } => {
            handle_transactions(settings, &file, limit)
        }
    }
}

/// Read a ledger with the configured date format
fn load_ledger(settings: &Settings, file: &Path) -> FiscalResult<Vec<Transaction>> {
    let format = LedgerFormat::new().with_date_format(&settings.date_format);
    LedgerReader::new(format).read_path(file)
}

fn handle_summary(
    settings: &Settings,
    file: &Path,
    output: Option<PathBuf>,
    json: bool,
) -> FiscalResult<()> {
    let transactions = load_ledger(settings, file)?;
    let report = SummaryReport::generate(&transactions, settings.conversion_rate)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            FiscalError::Export(format!("failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        if json {
            report.export_json(&mut writer)?;
        } else {
            report.export_csv(&mut writer)?;
        }
        println!("Report written to {}", path.display());
    } else if json {
        let mut stdout = std::io::stdout();
        report.export_json(&mut stdout)?;
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}

fn handle_health(settings: &Settings, file: &Path) -> FiscalResult<()> {
    let transactions = load_ledger(settings, file)?;
    let analyzer = Analyzer::new(&transactions).with_conversion_rate(settings.conversion_rate);

    println!("Profit:           {}", format_money_colored(analyzer.profit()));
    println!(
        "Financial health: {}",
        format_health_colored(analyzer.financial_health())
    );

    Ok(())
}

fn handle_transactions(
    settings: &Settings,
    file: &Path,
    limit: Option<usize>,
) -> FiscalResult<()> {
    let mut transactions = load_ledger(settings, file)?;
    if let Some(limit) = limit {
        transactions.truncate(limit);
    }
    print!("{}", format_transaction_register(&transactions));

    Ok(())
}
