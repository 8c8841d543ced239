//! Weight normalization and cost calculation.

use std::fmt::Display;
use std::str::FromStr;

const GRAMS_PER_KILOGRAM: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightUnit {
    #[default]
    Grams,
    Kilograms,
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WeightUnit::Grams => "Grams",
                WeightUnit::Kilograms => "Kilograms",
            }
        )
    }
}

impl FromStr for WeightUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(WeightUnit::Grams),
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            _ => Err(anyhow::anyhow!("Invalid weight unit: {}", s)),
        }
    }
}

/// Normalizes a weight to grams.
pub fn to_grams(weight: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Grams => weight,
        WeightUnit::Kilograms => weight * GRAMS_PER_KILOGRAM,
    }
}

/// Total cost in INR. No rounding is applied here, formatting is left to the caller.
pub fn total_cost(weight_in_grams: f64, price_per_gram: f64) -> f64 {
    weight_in_grams * price_per_gram
}

/// Result of pricing a quantity of silver in INR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub weight_in_grams: f64,
    pub price_per_gram: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    pub fn compute(weight: f64, unit: WeightUnit, price_per_gram: f64) -> Self {
        let weight_in_grams = to_grams(weight, unit);
        Self {
            weight_in_grams,
            price_per_gram,
            total_cost: total_cost(weight_in_grams, price_per_gram),
        }
    }
}
