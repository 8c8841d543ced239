pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::calc::CalculatorInput;
use crate::cli::ui;
use crate::core::calculator::WeightUnit;
use crate::core::config::AppConfig;
use crate::core::currency::Currency;
use crate::core::dataset::{DatasetProvider, Datasets};
use crate::core::price::PriceBand;
use anyhow::Result;
use tracing::{debug, info};

/// Calculator values as entered on the command line. A missing currency
/// falls back to the configured one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorArgs {
    pub weight: f64,
    pub unit: WeightUnit,
    pub price_per_gram: f64,
    pub currency: Option<Currency>,
}

impl CalculatorArgs {
    fn resolve(&self, config: &AppConfig) -> CalculatorInput {
        CalculatorInput {
            weight: self.weight,
            unit: self.unit,
            price_per_gram: self.price_per_gram,
            currency: self.currency.unwrap_or(config.currency),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    Calc(CalculatorArgs),
    History(PriceBand),
    States,
    January,
    Dashboard(CalculatorArgs, PriceBand),
}

impl AppCommand {
    fn needs_datasets(&self) -> bool {
        !matches!(self, AppCommand::Calc(_))
    }
}

/// Renders the output of `command`. Datasets are loaded at most once, and
/// only for commands that display them.
pub async fn render_command(
    command: AppCommand,
    config: &AppConfig,
    provider: &(dyn DatasetProvider + Send + Sync),
) -> Result<String> {
    let datasets = if command.needs_datasets() {
        let spinner = ui::new_spinner("Loading datasets...");
        let loaded = Datasets::load(provider).await;
        spinner.finish_and_clear();
        loaded?
    } else {
        Datasets::default()
    };

    let output = match command {
        AppCommand::Calc(args) => cli::calc::render(&args.resolve(config)),
        AppCommand::History(band) => cli::history::render(&datasets.prices, band, &config.chart),
        AppCommand::States => cli::states::render(&datasets.purchases, &config.chart),
        AppCommand::January => cli::january::render(&datasets.prices, &config.chart),
        AppCommand::Dashboard(args, band) => {
            cli::dashboard::render(&args.resolve(config), band, &datasets, &config.chart)
        }
    };
    Ok(output)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Silver calculator starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::CsvFileProvider::from_config(&config.data);
    let output = render_command(command, &config, &provider).await?;
    println!("{output}");
    Ok(())
}
