use super::ui;
use crate::core::calculator::{CostBreakdown, WeightUnit};
use crate::core::currency::{self, Currency};
use comfy_table::Cell;
use tracing::debug;

/// Values entered for a single pricing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorInput {
    pub weight: f64,
    pub unit: WeightUnit,
    pub price_per_gram: f64,
    pub currency: Currency,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            weight: 1.0,
            unit: WeightUnit::Grams,
            price_per_gram: 1.0,
            currency: Currency::Usd,
        }
    }
}

/// A priced quantity of silver together with its converted total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub breakdown: CostBreakdown,
    pub currency: Currency,
    pub converted: f64,
}

impl Quote {
    pub fn new(input: &CalculatorInput) -> Self {
        let breakdown = CostBreakdown::compute(input.weight, input.unit, input.price_per_gram);
        let converted = currency::convert(breakdown.total_cost, input.currency);
        debug!(?breakdown, currency = %input.currency, converted, "Computed quote");
        Self {
            breakdown,
            currency: input.currency,
            converted,
        }
    }

    pub fn display(&self, input: &CalculatorInput) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Item"), ui::header_cell("Value")]);
        table.add_row(vec![
            Cell::new(format!("Weight ({})", input.unit)),
            ui::number_cell(ui::format_amount(input.weight, 2)),
        ]);
        table.add_row(vec![
            Cell::new("Weight in grams"),
            ui::number_cell(ui::format_amount(self.breakdown.weight_in_grams, 2)),
        ]);
        table.add_row(vec![
            Cell::new("Price per gram (INR)"),
            ui::number_cell(ui::format_amount(self.breakdown.price_per_gram, 2)),
        ]);
        table.add_row(vec![
            Cell::new("Total Cost (INR)"),
            ui::total_cell(ui::format_amount(self.breakdown.total_cost, 2)),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Price Calculator", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());

        output.push_str(&format!(
            "\n\n{}\n\n",
            ui::style_text("Currency Converter", ui::StyleType::Title)
        ));
        output.push_str(&ui::style_text(
            &format!(
                "Rate: 1 INR = {} {}",
                self.currency.rate(),
                self.currency
            ),
            ui::StyleType::Subtle,
        ));
        output.push_str(&format!(
            "\nTotal Cost in {}: {}",
            ui::style_text(self.currency.code(), ui::StyleType::TotalLabel),
            ui::style_text(
                &ui::format_amount(self.converted, 2),
                ui::StyleType::TotalValue
            )
        ));

        output
    }
}

pub fn render(input: &CalculatorInput) -> String {
    Quote::new(input).display(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_for_two_kilograms() {
        let input = CalculatorInput {
            weight: 2.0,
            unit: WeightUnit::Kilograms,
            price_per_gram: 75.0,
            currency: Currency::Usd,
        };
        let quote = Quote::new(&input);
        assert_eq!(quote.breakdown.weight_in_grams, 2000.0);
        assert_eq!(quote.breakdown.total_cost, 150000.0);
        assert_eq!(ui::format_amount(quote.converted, 2), "1,650.00");
    }

    #[test]
    fn test_render_shows_converted_total() {
        let input = CalculatorInput {
            weight: 2.0,
            unit: WeightUnit::Kilograms,
            price_per_gram: 75.0,
            currency: Currency::Usd,
        };
        let output = render(&input);
        assert!(output.contains("Price Calculator"));
        assert!(output.contains("2,000.00"));
        assert!(output.contains("150,000.00"));
        assert!(output.contains("1,650.00"));
    }

    #[test]
    fn test_default_input() {
        let quote = Quote::new(&CalculatorInput::default());
        assert_eq!(quote.breakdown.total_cost, 1.0);
        assert_eq!(quote.converted, 0.011);
    }
}
