//! Fee Ledger CLI - build fee splitter records from parameter JSON

mod commands;
mod config;

use clap::{Parser, Subcommand};
use log::warn;
use std::io::Read;
use std::path::{Path, PathBuf};

use commands::{build_record, RecordKind};
use config::{Config, ConfigError};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "fee-ledger")]
#[command(about = "Build fee splitter ledger records", version = VERSION)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the record
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a treasury record
    Treasury {
        /// Parameter JSON file (reads stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Build a fee receipt record
    Receipt {
        /// Parameter JSON file (reads stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Build a fee payment record
    Payment {
        /// Parameter JSON file (reads stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

impl Commands {
    fn split(&self) -> (RecordKind, Option<&Path>) {
        match self {
            Commands::Treasury { input } => (RecordKind::Treasury, input.as_deref()),
            Commands::Receipt { input } => (RecordKind::Receipt, input.as_deref()),
            Commands::Payment { input } => (RecordKind::Payment, input.as_deref()),
        }
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (kind, input_path) = cli.command.split();
    let input = read_input(input_path)?;
    let output = build_record(kind, &input, cli.pretty || config.output.pretty)?;
    println!("{}", output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };

    let config = match loaded {
        Ok(config) => {
            init_logging(&config.logging.level);
            config
        }
        Err(ConfigError::IoError(e)) => {
            let config = Config::default();
            init_logging(&config.logging.level);
            warn!("Could not read config: {}, using defaults", e);
            config
        }
        Err(e) => {
            init_logging(&Config::default().logging.level);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
