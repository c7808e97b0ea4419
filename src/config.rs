//! Application configuration
//!
//! Values come from an optional TOML file; command-line flags override them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::sample::DEFAULT_BUDGET;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub budget: BudgetConfig,
    pub profile: ProfileConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub total: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV replacing the built-in product list.
    pub products: Option<PathBuf>,
    /// CSV replacing the built-in expense list.
    pub expenses: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Nothing is logged without a file; the terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        BudgetConfig {
            total: Decimal::from(DEFAULT_BUDGET),
            currency: "₽".to_string(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            name: "Иван Петров".to_string(),
            email: "ivan@example.com".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Values given on the command line. Each `Some` replaces the file value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub products: Option<PathBuf>,
    pub expenses: Option<PathBuf>,
    pub budget: Option<Decimal>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Applies command-line overrides and re-validates the result.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<()> {
        if let Some(products) = overrides.products {
            self.data.products = Some(products);
        }
        if let Some(expenses) = overrides.expenses {
            self.data.expenses = Some(expenses);
        }
        if let Some(budget) = overrides.budget {
            self.budget.total = budget;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.budget.total > Decimal::ZERO,
            "Budget total must be positive, got {}",
            self.budget.total
        );
        Ok(())
    }
}
