use super::{chart, ui};
use crate::core::config::ChartConfig;
use crate::core::price::{self, PriceRecord};
use comfy_table::Cell;

pub const NO_RECORDS_INFO: &str = "No January records found in the dataset.";

pub fn render(prices: &[PriceRecord], chart_config: &ChartConfig) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("January Silver Prices (Yearly)", ui::StyleType::Title)
    );

    let january = price::january_prices(prices);
    if january.is_empty() {
        output.push_str(&ui::style_text(NO_RECORDS_INFO, ui::StyleType::Info));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Year"),
        ui::header_cell("Price (INR per kg)"),
    ]);
    for record in &january {
        table.add_row(vec![
            Cell::new(record.year),
            ui::number_cell(ui::format_amount(record.price_per_kg, 2)),
        ]);
    }
    output.push_str(&table.to_string());
    output.push_str("\n\n");

    let points: Vec<(String, f64)> = january
        .iter()
        .map(|r| (r.year.to_string(), r.price_per_kg))
        .collect();
    output.push_str(&chart::render_line_chart(
        "Silver Price in January (INR per kg)",
        &points,
        chart_config.width,
        chart_config.height,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: &str, price_per_kg: f64) -> PriceRecord {
        PriceRecord {
            year,
            month: month.to_string(),
            price_per_kg,
        }
    }

    #[test]
    fn test_render_january_rows_in_year_order() {
        let prices = vec![
            record(2021, "Jan", 66000.0),
            record(2021, "Feb", 68000.0),
            record(2019, "JAN", 39000.0),
        ];
        let output = render(&prices, &ChartConfig::default());
        let first = output.find("39,000.00").unwrap();
        let second = output.find("66,000.00").unwrap();
        assert!(first < second);
        assert!(!output.contains("68,000"));
        assert!(output.contains("Silver Price in January (INR per kg)"));
    }

    #[test]
    fn test_render_without_january_records() {
        let prices = vec![record(2021, "Feb", 68000.0)];
        let output = render(&prices, &ChartConfig::default());
        assert!(output.contains(NO_RECORDS_INFO));
        assert!(!output.contains("Price (INR per kg)"));
    }
}
