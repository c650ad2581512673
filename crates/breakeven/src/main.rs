use std::path::PathBuf;

use breakeven::commands::{self, LimitsUpdate, OutputFormat};
use breakeven::{DataDirectory, init_logging};
use breakeven_core::analysis::SweepConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "breakeven")]
#[command(about = "Supply-chain profitability and break-even calculator")]
struct Args {
    /// Path to the data directory (default: ~/.breakeven/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Results, constraint check and break-even summary for a scenario
    Report {
        /// Scenario file, or the name of a saved scenario
        scenario: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Net profit across a range of sales percentages
    Sweep {
        /// Scenario file, or the name of a saved scenario
        scenario: PathBuf,
        #[arg(long, default_value_t = 65)]
        from: u32,
        #[arg(long, default_value_t = 100)]
        to: u32,
        #[arg(long, default_value_t = 1)]
        step: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Evaluate a single expression
    Eval {
        expression: String,
        /// Scenario providing inputs and parameters (default inputs otherwise)
        #[arg(long)]
        scenario: Option<PathBuf>,
    },
    /// Show or update the operational limits in config.yaml
    Limits {
        #[arg(long)]
        max_production: Option<f64>,
        #[arg(long)]
        max_sales: Option<f64>,
        #[arg(long)]
        max_inventory: Option<f64>,
        #[arg(long)]
        max_emissions: Option<f64>,
    },
    /// List scenarios saved in the data directory
    Scenarios,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;
    let dir = DataDirectory::new(data_dir);

    let output = match args.command {
        Command::Report { scenario, format } => commands::report(&dir, &scenario, format)?,
        Command::Sweep {
            scenario,
            from,
            to,
            step,
            format,
        } => {
            let config = SweepConfig::new(from, to, step)?;
            commands::sweep(&dir, &scenario, config, format)?
        }
        Command::Eval {
            expression,
            scenario,
        } => commands::eval(&dir, &expression, scenario.as_deref())?,
        Command::Limits {
            max_production,
            max_sales,
            max_inventory,
            max_emissions,
        } => commands::limits(
            &dir,
            LimitsUpdate {
                max_production,
                max_sales,
                max_inventory,
                max_emissions,
            },
        )?,
        Command::Scenarios => commands::scenarios(&dir)?,
    };

    println!("{output}");
    tracing::info!("Done");
    Ok(())
}
