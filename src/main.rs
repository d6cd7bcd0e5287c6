use anyhow::Result;
use clap::{Parser, Subcommand};

use fiscal::cli::{handle_report_command, ReportCommands};
use fiscal::config::{FiscalPaths, Settings};

#[derive(Parser)]
#[command(
    name = "fiscal",
    version,
    about = "Command-line financial health summary for transaction ledgers",
    long_about = "fiscal reads a CSV ledger of dated, categorized transactions and \
                  derives revenue, expenses, profit, margin, the average transaction \
                  amount and a coarse financial health classification."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report generation commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FiscalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(cmd)) => {
            handle_report_command(&settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("fiscal configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Conversion rate: {}", settings.conversion_rate);
        }
        None => {
            println!("fiscal - financial health summary for transaction ledgers");
            println!();
            println!("Run 'fiscal --help' for usage information.");
            println!("Run 'fiscal report summary <ledger.csv>' to analyze a ledger.");
        }
    }

    Ok(())
}
