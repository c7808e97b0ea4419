use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use homy::{App, AppConfig, config::Overrides, logging, ui};

/// Home-improvement shopping companion for the terminal.
#[derive(Debug, Parser)]
#[command(name = "homy", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file replacing the built-in product catalog
    #[arg(long)]
    products: Option<PathBuf>,

    /// CSV file replacing the built-in expense history
    #[arg(long)]
    expenses: Option<PathBuf>,

    /// Total renovation budget
    #[arg(long)]
    budget: Option<Decimal>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `homy=trace`
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        config.apply_overrides(Overrides {
            products: self.products,
            expenses: self.expenses,
            budget: self.budget,
            log_file: self.log_file,
            log_level: self.log_level,
        })?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    let _guard = logging::init_logging(&config.logging)?;

    // Load data before touching the terminal so errors print normally.
    let app = App::new(&config)?;
    tracing::info!(tab = ?app.active_tab, "Starting UI");

    // The terminal is restored before the error propagates.
    ui::run(app).inspect_err(|err| tracing::error!(error = %err, "UI loop failed"))
}
