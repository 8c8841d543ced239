use super::{calc, history, january, states, ui};
use crate::core::config::ChartConfig;
use crate::core::dataset::Datasets;
use crate::core::price::PriceBand;

/// Renders every section in page order, separated by rules.
pub fn render(
    input: &calc::CalculatorInput,
    band: PriceBand,
    datasets: &Datasets,
    chart_config: &ChartConfig,
) -> String {
    let title = ui::style_text("Silver Price Calculator", ui::StyleType::Title);
    let sections = [
        calc::render(input),
        history::render(&datasets.prices, band, chart_config),
        states::render(&datasets.purchases, chart_config),
        january::render(&datasets.prices, chart_config),
    ];
    let separator = format!("\n\n{}\n\n", ui::separator());
    format!("{title}\n\n{}", sections.join(separator.as_str()))
}
