//! currency-exchange CLI - inspect a registry and convert amounts
//!
//! ## Example Usage
//!
//! ```bash
//! # Run the sample conversions
//! currency-exchange demo
//!
//! # Convert with rates from a config file
//! currency-exchange --config rates.toml convert 1000 RUB CNY
//!
//! # Show registered currencies as JSON
//! currency-exchange list --json
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use currency_exchange::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

/// currency-exchange: registry of currencies and pairwise exchange rates
#[derive(Parser)]
#[command(name = "currency-exchange")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Currency registry with pairwise exchange rates", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample conversions
    Demo,

    /// Convert an amount between two currencies
    Convert {
        /// Amount in the source currency
        #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: f64,

        /// Source currency code
        #[arg(value_name = "FROM")]
        from: String,

        /// Target currency code
        #[arg(value_name = "TO")]
        to: String,
    },

    /// List registered currencies
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the directed rate table
    Rates,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".currency-exchange").join("config.toml"))
}

/// Explicit path must exist; the default location falls back to the sample set
fn load_config(path: Option<&Path>) -> anyhow::Result<ExchangeConfig> {
    if let Some(path) = path {
        return ExchangeConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(default) if default.exists() => ExchangeConfig::load(&default)
            .with_context(|| format!("Failed to load config {}", default.display())),
        _ => {
            log::info!("No config file found, using sample currencies");
            Ok(ExchangeConfig::sample())
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let exchange = config.build()?;

    if cli.verbose {
        println!(
            "{} v{}",
            "currency-exchange".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(
            "{}",
            format!(
                "{} currencies, {} directed rates",
                exchange.len(),
                exchange.num_pairs()
            )
            .dimmed()
        );
    }

    match cli.command {
        Commands::Demo => show_demo(&exchange),
        Commands::Convert { amount, from, to } => {
            let converted = exchange.convert(amount, &from, &to)?;
            println!("{} {} = {} {}", amount, from, converted, to);
            Ok(())
        }
        Commands::List { json } => list_currencies(&exchange, json),
        Commands::Rates => {
            for (pair, rate) in exchange.pairs() {
                println!("{:<12} {}", pair.to_string().bold(), rate);
            }
            Ok(())
        }
    }
}

fn show_demo(exchange: &Exchange) -> anyhow::Result<()> {
    for (amount, from, to) in [(1000.0, "RUB", "CNY"), (1.0, "BTC", "USD"), (2.0, "ETH", "USD")] {
        let converted = exchange.convert(amount, from, to)?;
        println!("{} {} = {} {}", amount, from, converted, to);
    }
    Ok(())
}

fn list_currencies(exchange: &Exchange, json: bool) -> anyhow::Result<()> {
    let currencies: Vec<&Currency> = exchange.currencies().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&currencies)?);
        return Ok(());
    }

    for currency in currencies {
        let change = match currency.change() {
            Some(c) if c >= 0.0 => format!("{:+.2}%", c * 100.0).green(),
            Some(c) => format!("{:+.2}%", c * 100.0).red(),
            None => "-".dimmed(),
        };
        println!(
            "{:<6} {:>14} {:>9}  history: {:?}",
            currency.name().bold(),
            currency.current_rate(),
            change,
            currency.history()
        );
    }
    Ok(())
}
