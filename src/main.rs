//! import-calc - Vehicle import cost calculator CLI
//!
//! Fetches daily NBP reference rates and estimates the landed cost of
//! importing a vehicle into Poland.

use anyhow::Result;
use clap::{Parser, Subcommand};
use import_calc::calc::ImportRoute;
use import_calc::commands::{CalculateCommand, RatesCommand};
use import_calc::config::{Config, OutputFormat};
use import_calc::nbp::Currency;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "import-calc",
    version,
    about = "Vehicle import cost calculator for Poland",
    long_about = "Estimates the landed cost of importing a vehicle from the USA or Japan into Poland, combining daily NBP exchange rates with duty, excise, VAT and fixed cost factors."
)]
struct Cli {
    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// NBP API base URL
    #[arg(long, global = true, env = "IMPORT_CALC_API_BASE")]
    api_base: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate full import costs from the USA (price in USD)
    #[command(alias = "u")]
    Usa {
        /// Vehicle price in USD, e.g. 15000
        price: f64,

        /// Engine size in cm³ (selects the excise band)
        #[arg(long)]
        engine_cc: Option<u32>,

        /// Ocean shipping cost in EUR (route default if omitted)
        #[arg(long)]
        shipping: Option<f64>,
    },

    /// Calculate full import costs from Japan (price in JPY)
    #[command(alias = "j")]
    Japan {
        /// Vehicle price in JPY, e.g. 1250000
        price: f64,

        /// Engine size in cm³ (selects the excise band)
        #[arg(long)]
        engine_cc: Option<u32>,

        /// Ocean shipping cost in EUR (route default if omitted)
        #[arg(long)]
        shipping: Option<f64>,
    },

    /// Show current NBP mid rates
    #[command(alias = "r")]
    Rates {
        /// Currency codes to fetch (defaults to USD, JPY, EUR)
        codes: Vec<Currency>,
    },

    /// List supported import routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }

    match cli.command {
        Commands::Usa { price, engine_cc, shipping } => {
            let cmd = CalculateCommand::new(config, ImportRoute::Usa);
            let output = cmd.execute(price, engine_cc, shipping).await?;
            println!("{}", output);
        }

        Commands::Japan { price, engine_cc, shipping } => {
            let cmd = CalculateCommand::new(config, ImportRoute::Japan);
            let output = cmd.execute(price, engine_cc, shipping).await?;
            println!("{}", output);
        }

        Commands::Rates { codes } => {
            let currencies = if codes.is_empty() {
                vec![Currency::Usd, Currency::Jpy, Currency::Eur]
            } else {
                codes
            };

            let cmd = RatesCommand::new(config);
            let output = cmd.execute(&currencies).await?;
            println!("{}", output);
        }

        Commands::Routes => {
            println!("Supported import routes:\n");
            println!("{:<8} {:<10} {:<8} {:<16}", "Route", "Currency", "Duty", "Shipping (EUR)");
            println!("{:-<8} {:-<10} {:-<8} {:-<16}", "", "", "", "");

            for route in ImportRoute::all() {
                println!(
                    "{:<8} {:<10} {:<8} {:<16}",
                    route.to_string(),
                    route.source_currency().code(),
                    format!("{:.0}%", route.duty_rate() * 100.0),
                    format!("{:.0}", route.default_shipping_eur())
                );
            }
        }
    }

    Ok(())
}
