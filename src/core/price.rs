//! Historical silver price records, price bands and month extraction.

use anyhow::{Result, anyhow};
use chrono::Month;
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

/// One row of the historical price dataset. Prices are INR per kilogram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Silver_Price_INR_per_kg")]
    pub price_per_kg: f64,
}

impl PriceRecord {
    /// Interprets the month label, accepting full names and abbreviations
    /// regardless of case or surrounding whitespace.
    pub fn month(&self) -> Option<Month> {
        self.month.trim().parse::<Month>().ok()
    }

    /// Label used on the time axis, e.g. `2019-Jan`.
    pub fn date_label(&self) -> String {
        format!("{}-{}", self.year, self.month.trim())
    }
}

const LOWER_BOUND: f64 = 20000.0;
const UPPER_BOUND: f64 = 30000.0;

/// Named inclusive price ranges in INR per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceBand {
    #[default]
    All,
    UpTo20k,
    Between20kAnd30k,
    From30k,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::All,
        PriceBand::UpTo20k,
        PriceBand::Between20kAnd30k,
        PriceBand::From30k,
    ];

    /// Boundaries are inclusive on both sides, so adjacent bands share 20,000 and 30,000.
    pub fn contains(&self, price_per_kg: f64) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::UpTo20k => price_per_kg <= LOWER_BOUND,
            PriceBand::Between20kAnd30k => (LOWER_BOUND..=UPPER_BOUND).contains(&price_per_kg),
            PriceBand::From30k => price_per_kg >= UPPER_BOUND,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PriceBand::All => "All Data",
            PriceBand::UpTo20k => "≤ 20,000 INR per kg",
            PriceBand::Between20kAnd30k => "Between 20,000 - 30,000 INR per kg",
            PriceBand::From30k => "≥ 30,000 INR per kg",
        }
    }
}

impl Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PriceBand::All => "all",
                PriceBand::UpTo20k => "le20k",
                PriceBand::Between20kAnd30k => "20k-30k",
                PriceBand::From30k => "ge30k",
            }
        )
    }
}

impl FromStr for PriceBand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PriceBand::All),
            "le20k" | "<=20000" => Ok(PriceBand::UpTo20k),
            "20k-30k" | "20000-30000" => Ok(PriceBand::Between20kAnd30k),
            "ge30k" | ">=30000" => Ok(PriceBand::From30k),
            _ => Err(anyhow!(
                "Invalid price band: {} (expected one of all, le20k, 20k-30k, ge30k)",
                s
            )),
        }
    }
}

/// Returns the records whose price falls in `band`, keeping their order.
pub fn filter_by_band(records: &[PriceRecord], band: PriceBand) -> Vec<PriceRecord> {
    records
        .iter()
        .filter(|r| band.contains(r.price_per_kg))
        .cloned()
        .collect()
}

/// Returns the January records, sorted by year.
pub fn january_prices(records: &[PriceRecord]) -> Vec<PriceRecord> {
    let mut january: Vec<PriceRecord> = records
        .iter()
        .filter(|r| r.month() == Some(Month::January))
        .cloned()
        .collect();
    january.sort_by_key(|r| r.year);
    january
}

/// Record count and price range of a non-empty selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

/// Summarizes `records`, or `None` when there is nothing to summarize.
pub fn summarize(records: &[PriceRecord]) -> Option<PriceSummary> {
    let first = records.first()?;
    let (min, max) = records
        .iter()
        .fold((first.price_per_kg, first.price_per_kg), |(lo, hi), r| {
            (lo.min(r.price_per_kg), hi.max(r.price_per_kg))
        });
    Some(PriceSummary {
        count: records.len(),
        min,
        max,
    })
}
