use super::{chart, ui};
use crate::core::config::ChartConfig;
use crate::core::price::{self, PriceBand, PriceRecord};
use comfy_table::Cell;
use tracing::debug;

pub const CHART_TITLE: &str = "Historical Silver Price (INR per kg)";
pub const NO_DATA_WARNING: &str = "No data available for the selected filter!";

/// Renders the price history restricted to `band`: a summary line, a table and a line chart.
pub fn render(prices: &[PriceRecord], band: PriceBand, chart_config: &ChartConfig) -> String {
    let filtered = price::filter_by_band(prices, band);
    debug!(%band, total = prices.len(), matched = filtered.len(), "Filtered price history");

    let mut output = format!(
        "{}\n{}\n\n",
        ui::style_text("Historical Silver Price Chart", ui::StyleType::Title),
        ui::style_text(
            &format!("Filter: {}", band.description()),
            ui::StyleType::Subtle
        )
    );

    match price::summarize(&filtered) {
        Some(summary) => {
            output.push_str(&ui::style_text(
                &format!(
                    "Filtered Data: {} records | Price Range: ₹{} - ₹{}",
                    summary.count,
                    ui::format_amount(summary.min, 0),
                    ui::format_amount(summary.max, 0)
                ),
                ui::StyleType::Info,
            ));
            output.push_str("\n\n");
            output.push_str(&price_table(&filtered));
            output.push_str("\n\n");
        }
        None => {
            output.push_str(&ui::style_text(NO_DATA_WARNING, ui::StyleType::Warning));
            output.push_str("\n\n");
        }
    }

    let points: Vec<(String, f64)> = filtered
        .iter()
        .map(|r| (r.date_label(), r.price_per_kg))
        .collect();
    output.push_str(&chart::render_line_chart(
        CHART_TITLE,
        &points,
        chart_config.width,
        chart_config.height,
    ));

    output
}

fn price_table(records: &[PriceRecord]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Year"),
        ui::header_cell("Month"),
        ui::header_cell("Price (INR per kg)"),
    ]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.year),
            Cell::new(record.month.trim()),
            ui::number_cell(ui::format_amount(record.price_per_kg, 2)),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<PriceRecord> {
        [
            (2012, "Jan", 19999.0),
            (2012, "Feb", 20000.0),
            (2013, "Mar", 25000.0),
            (2014, "Apr", 30000.0),
            (2015, "May", 30001.0),
        ]
        .into_iter()
        .map(|(year, month, price_per_kg)| PriceRecord {
            year,
            month: month.to_string(),
            price_per_kg,
        })
        .collect()
    }

    #[test]
    fn test_render_band_summary() {
        let output = render(
            &dataset(),
            PriceBand::Between20kAnd30k,
            &ChartConfig::default(),
        );
        assert!(output.contains("Filtered Data: 3 records | Price Range: ₹20,000 - ₹30,000"));
        assert!(output.contains("2012-Feb"));
        assert!(output.contains("2014-Apr"));
        assert!(output.contains(CHART_TITLE));
        assert!(!output.contains(NO_DATA_WARNING));
    }

    #[test]
    fn test_render_all_lists_every_record() {
        let output = render(&dataset(), PriceBand::All, &ChartConfig::default());
        assert!(output.contains("Filtered Data: 5 records"));
        assert!(output.contains("30,001.00"));
        assert!(output.contains("19,999.00"));
    }

    #[test]
    fn test_render_empty_band_warns() {
        let data = dataset();
        let output = render(&data[..1], PriceBand::From30k, &ChartConfig::default());
        assert!(output.contains(NO_DATA_WARNING));
        assert!(!output.contains("Filtered Data"));
        assert!(output.contains("(no data)"));
    }
}
