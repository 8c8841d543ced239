use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use silvercalc::core::log::init_logging;
use silvercalc::core::{Currency, PriceBand, WeightUnit};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct CalcArgs {
    /// Unit of the entered weight (grams or kilograms)
    #[arg(short, long, default_value = "grams")]
    unit: WeightUnit,

    /// Weight of silver
    #[arg(
        short,
        long,
        default_value_t = 1.0,
        value_parser = non_negative,
        allow_negative_numbers = true
    )]
    weight: f64,

    /// Current price per gram in INR
    #[arg(
        short,
        long,
        default_value_t = 1.0,
        value_parser = non_negative,
        allow_negative_numbers = true
    )]
    price: f64,

    /// Currency to convert the total cost into (USD or EUR) [default: from config]
    #[arg(long)]
    currency: Option<Currency>,
}

#[derive(Args, Clone, Copy)]
struct BandArgs {
    /// Price range filter: all, le20k, 20k-30k or ge30k (INR per kg)
    #[arg(short, long, default_value = "all")]
    band: PriceBand,
}

impl From<CalcArgs> for silvercalc::CalculatorArgs {
    fn from(args: CalcArgs) -> silvercalc::CalculatorArgs {
        silvercalc::CalculatorArgs {
            weight: args.weight,
            unit: args.unit,
            price_per_gram: args.price,
            currency: args.currency,
        }
    }
}

impl From<Commands> for silvercalc::AppCommand {
    fn from(cmd: Commands) -> silvercalc::AppCommand {
        match cmd {
            Commands::Calc(args) => silvercalc::AppCommand::Calc(args.into()),
            Commands::History(args) => silvercalc::AppCommand::History(args.band),
            Commands::States => silvercalc::AppCommand::States,
            Commands::January => silvercalc::AppCommand::January,
            Commands::Dashboard { calc, band } => {
                silvercalc::AppCommand::Dashboard(calc.into(), band.band)
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Price a quantity of silver and convert the cost
    Calc(CalcArgs),
    /// Display historical silver prices, optionally filtered by price range
    History(BandArgs),
    /// Display state-wise silver purchases and the top purchasing states
    States,
    /// Display January silver prices by year
    January,
    /// Display every section
    Dashboard {
        #[command(flatten)]
        calc: CalcArgs,
        #[command(flatten)]
        band: BandArgs,
    },
}

fn non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("`{s}` must be zero or greater"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => silvercalc::cli::setup::setup(),
        Some(cmd) => silvercalc::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse_error(args: &[&str]) -> Option<ErrorKind> {
        Cli::try_parse_from(args).err().map(|e| e.kind())
    }

    fn calc_args(args: &[&str]) -> Option<CalcArgs> {
        match Cli::try_parse_from(args).ok()?.command? {
            Commands::Calc(calc) => Some(calc),
            Commands::Dashboard { calc, .. } => Some(calc),
            _ => None,
        }
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        assert_eq!(
            parse_error(&["silvercalc", "calc", "-w", "-1"]),
            Some(ErrorKind::ValueValidation)
        );
        assert_eq!(
            parse_error(&["silvercalc", "dashboard", "--weight", "-0.5"]),
            Some(ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        for price in ["NaN", "inf", "infinity"] {
            assert_eq!(
                parse_error(&["silvercalc", "calc", "--price", price]),
                Some(ErrorKind::ValueValidation),
                "price {price} was accepted"
            );
        }
        assert_eq!(
            parse_error(&["silvercalc", "calc", "--price", "abc"]),
            Some(ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn test_zero_and_defaults_are_accepted() {
        let calc = calc_args(&["silvercalc", "calc", "-w", "0"]).unwrap();
        assert_eq!(calc.weight, 0.0);
        assert_eq!(calc.price, 1.0);

        let args = ["silvercalc", "calc", "-u", "kilograms", "-w", "2", "-p", "75"];
        let calc = calc_args(&args).unwrap();
        assert_eq!(calc.unit, WeightUnit::Kilograms);
        assert_eq!(calc.weight, 2.0);
        assert_eq!(calc.price, 75.0);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("0"), Ok(0.0));
        assert_eq!(non_negative("12.5"), Ok(12.5));
        assert!(non_negative("-1").is_err());
        assert!(non_negative("NaN").is_err());
        assert!(non_negative("inf").is_err());
        assert!(non_negative("").is_err());
    }
}
