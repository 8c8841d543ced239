//! Core business logic abstractions

pub mod calculator;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod log;
pub mod price;
pub mod purchase;

// Re-export main types for cleaner imports
pub use calculator::{CostBreakdown, WeightUnit};
pub use currency::Currency;
pub use dataset::{DatasetProvider, Datasets};
pub use price::{PriceBand, PriceRecord};
pub use purchase::StatePurchase;
