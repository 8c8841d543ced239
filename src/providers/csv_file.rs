use crate::core::config::DataConfig;
use crate::core::dataset::{DatasetProvider, parse_prices, parse_purchases};
use crate::core::price::PriceRecord;
use crate::core::purchase::StatePurchase;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads both datasets from CSV files on disk.
pub struct CsvFileProvider {
    prices_path: PathBuf,
    states_path: PathBuf,
}

impl CsvFileProvider {
    pub fn new(prices_path: impl Into<PathBuf>, states_path: impl Into<PathBuf>) -> Self {
        Self {
            prices_path: prices_path.into(),
            states_path: states_path.into(),
        }
    }

    pub fn from_config(data: &DataConfig) -> Self {
        Self::new(data.prices_path(), data.states_path())
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    debug!("Reading {}", path.display());
    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read data file: {}", path.display()))
}

#[async_trait]
impl DatasetProvider for CsvFileProvider {
    async fn load_prices(&self) -> Result<Vec<PriceRecord>> {
        let bytes = read_file(&self.prices_path).await?;
        parse_prices(bytes.as_slice())
            .with_context(|| format!("Failed to parse {}", self.prices_path.display()))
    }

    async fn load_purchases(&self) -> Result<Vec<StatePurchase>> {
        let bytes = read_file(&self.states_path).await?;
        parse_purchases(bytes.as_slice())
            .with_context(|| format!("Failed to parse {}", self.states_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Datasets;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_files() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let prices = temp_dir.path().join("prices.csv");
        let states = temp_dir.path().join("states.csv");
        fs::write(
            &prices,
            "Year,Month,Silver_Price_INR_per_kg\n2020,Jan,47000\n2021,Jan,66000\n",
        )?;
        fs::write(&states, "State,Silver_Purchased_kg\nGoa,12.5\n")?;

        let provider = CsvFileProvider::new(&prices, &states);
        let datasets = Datasets::load(&provider).await?;
        assert_eq!(datasets.prices.len(), 2);
        assert_eq!(datasets.purchases.len(), 1);
        assert_eq!(datasets.purchases[0].state, "Goa");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let provider = CsvFileProvider::new("/nonexistent/prices.csv", "/nonexistent/states.csv");
        let err = provider.load_prices().await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/prices.csv"));
    }
}
