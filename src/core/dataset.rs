//! Dataset loading abstractions and CSV parsing.

use crate::core::price::PriceRecord;
use crate::core::purchase::StatePurchase;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::Read;
use tracing::debug;

pub const PRICE_COLUMNS: [&str; 3] = ["Year", "Month", "Silver_Price_INR_per_kg"];
pub const STATE_COLUMNS: [&str; 2] = ["State", "Silver_Purchased_kg"];

/// Immutable snapshot of both datasets for a single run.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub prices: Vec<PriceRecord>,
    pub purchases: Vec<StatePurchase>,
}

#[async_trait]
pub trait DatasetProvider: Send + Sync {
    async fn load_prices(&self) -> Result<Vec<PriceRecord>>;
    async fn load_purchases(&self) -> Result<Vec<StatePurchase>>;
}

impl Datasets {
    /// Loads both datasets; any failure is fatal for the run.
    pub async fn load(provider: &(dyn DatasetProvider + Send + Sync)) -> Result<Self> {
        let (prices, purchases) =
            tokio::try_join!(provider.load_prices(), provider.load_purchases())?;
        debug!(
            prices = prices.len(),
            purchases = purchases.len(),
            "Loaded datasets"
        );
        Ok(Self { prices, purchases })
    }
}

pub fn parse_prices<R: Read>(reader: R) -> Result<Vec<PriceRecord>> {
    parse_records(reader, &PRICE_COLUMNS)
}

pub fn parse_purchases<R: Read>(reader: R) -> Result<Vec<StatePurchase>> {
    parse_records(reader, &STATE_COLUMNS)
}

fn parse_records<T, R>(reader: R, required: &[&str]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Spreadsheet exports often prefix the first header with a BOM.
    let headers: csv::StringRecord = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}'))
        .collect();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            bail!("Missing required column: {}", column);
        }
    }
    reader.set_headers(headers.clone());

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let row = row.with_context(|| format!("Failed to read CSV line {line}"))?;
        let record: T = row
            .deserialize(Some(&headers))
            .with_context(|| format!("Invalid record on line {line}"))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICES_CSV: &str = "\u{feff}Year,Month,Silver_Price_INR_per_kg\n\
        2019, Jan ,39500.5\n\
        2019,Feb,40120\n";

    #[test]
    fn test_parse_prices() {
        let prices = parse_prices(PRICES_CSV.as_bytes()).unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].year, 2019);
        assert_eq!(prices[0].month, "Jan");
        assert_eq!(prices[0].price_per_kg, 39500.5);
        assert_eq!(prices[1].price_per_kg, 40120.0);
    }

    #[test]
    fn test_parse_purchases_ignores_extra_columns() {
        let csv = "Rank,State,Silver_Purchased_kg\n1,Kerala,1200.5\n2,Goa,80\n";
        let purchases = parse_purchases(csv.as_bytes()).unwrap();
        assert_eq!(
            purchases,
            vec![
                StatePurchase {
                    state: "Kerala".to_string(),
                    purchased_kg: 1200.5
                },
                StatePurchase {
                    state: "Goa".to_string(),
                    purchased_kg: 80.0
                },
            ]
        );
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Year,Month,Price\n2019,Jan,1\n";
        let err = parse_prices(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Silver_Price_INR_per_kg"));
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let csv = "State,Silver_Purchased_kg\nKerala,lots\n";
        let err = parse_purchases(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    struct StaticProvider;

    #[async_trait]
    impl DatasetProvider for StaticProvider {
        async fn load_prices(&self) -> Result<Vec<PriceRecord>> {
            parse_prices(PRICES_CSV.as_bytes())
        }

        async fn load_purchases(&self) -> Result<Vec<StatePurchase>> {
            bail!("states unavailable")
        }
    }

    #[tokio::test]
    async fn test_load_fails_when_any_dataset_fails() {
        let result = Datasets::load(&StaticProvider).await;
        assert!(result.unwrap_err().to_string().contains("states unavailable"));
    }
}
