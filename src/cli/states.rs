use super::{chart, ui};
use crate::core::config::ChartConfig;
use crate::core::purchase::{self, StatePurchase, TOP_STATES};
use comfy_table::Cell;

pub fn render(purchases: &[StatePurchase], chart_config: &ChartConfig) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text(
            "State-wise Silver Purchases in India",
            ui::StyleType::Title
        )
    );
    output.push_str(&purchase_table(purchases, 2));

    let top = purchase::top_states(purchases, TOP_STATES);
    output.push_str(&format!(
        "\n\n{}\n\n",
        ui::style_text(
            &format!("Top {TOP_STATES} States by Silver Purchases (kg)"),
            ui::StyleType::Subtitle
        )
    ));
    output.push_str(&purchase_table(&top, 0));
    output.push_str("\n\n");

    let bars: Vec<(String, f64)> = top
        .iter()
        .map(|p| (p.state.clone(), p.purchased_kg))
        .collect();
    output.push_str(&chart::render_bar_chart(
        "Silver Purchased (kg)",
        &bars,
        chart_config.width,
    ));

    output
}

fn purchase_table(purchases: &[StatePurchase], decimals: usize) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("State"),
        ui::header_cell("Silver Purchased (kg)"),
    ]);
    for p in purchases {
        table.add_row(vec![
            Cell::new(&p.state),
            ui::number_cell(ui::format_amount(p.purchased_kg, decimals)),
        ]);
    }
    table.to_string()
}
