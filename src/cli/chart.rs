//! Terminal charts drawn into a fixed-size character grid.
//!
//! Output is deterministic so charts can be compared verbatim in tests.
//!
//! Plot elements:
//! - data points: `o`
//! - segments between consecutive points: `-`
//! - bars: `█`

use super::ui::format_amount;

const POINT: char = 'o';
const SEGMENT: char = '-';
const BAR: char = '█';

/// Renders a line chart of labelled values in their given order.
///
/// The x axis is categorical: points are spread evenly across `width` columns
/// and only the first and last labels are printed under the axis.
pub fn render_line_chart(
    title: &str,
    points: &[(String, f64)],
    width: usize,
    height: usize,
) -> String {
    let mut out = format!("{title}\n");
    let Some((y_min, y_max)) = y_range(points) else {
        out.push_str("(no data)\n");
        return out;
    };

    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    let cells: Vec<(usize, usize)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, y))| {
            (
                map_x(i, points.len(), width),
                map_y(*y, y_min, y_max, height),
            )
        })
        .collect();

    // Segments first so points overlay them.
    for pair in cells.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        draw_line(&mut grid, x0, y0, x1, y1, SEGMENT);
    }
    for &(x, y) in &cells {
        grid[y][x] = POINT;
    }

    let top_label = format_amount(y_max, 0);
    let bottom_label = format_amount(y_min, 0);
    let label_width = top_label.chars().count().max(bottom_label.chars().count());

    for (row_idx, row) in grid.into_iter().enumerate() {
        let row: String = row.into_iter().collect();
        let line = if row_idx == 0 {
            format!("{top_label:>label_width$} ┤{row}")
        } else if row_idx == height - 1 {
            format!("{bottom_label:>label_width$} ┤{row}")
        } else {
            format!("{:label_width$} │{row}", "")
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("{:label_width$} └{}\n", "", "─".repeat(width)));
    out.push_str(&format!(
        "{:indent$}{}\n",
        "",
        x_axis_labels(points, width),
        indent = label_width + 2
    ));

    out
}

/// Renders a horizontal bar chart. Bars are scaled so the largest value spans `width`.
pub fn render_bar_chart(title: &str, bars: &[(String, f64)], width: usize) -> String {
    let mut out = format!("{title}\n");
    if bars.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let width = width.max(10);
    let label_width = bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = bars.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);

    for (label, value) in bars {
        let len = if max > 0.0 && *value > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{label:<label_width$} │{} {}\n",
            BAR.to_string().repeat(len),
            format_amount(*value, 0)
        ));
    }

    out
}

fn y_range(points: &[(String, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (_, y) in points {
        min_y = min_y.min(*y);
        max_y = max_y.max(*y);
    }
    if min_y.is_finite() && max_y.is_finite() {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn x_axis_labels(points: &[(String, f64)], width: usize) -> String {
    let first = points.first().map(|(l, _)| l.as_str()).unwrap_or("");
    match points.last() {
        Some((last, _)) if points.len() > 1 => {
            let used = first.chars().count() + last.chars().count();
            let gap = width.saturating_sub(used).max(1);
            format!("{first}{}{last}", " ".repeat(gap))
        }
        _ => first.to_string(),
    }
}

fn map_x(index: usize, count: usize, width: usize) -> usize {
    if count < 2 {
        return 0;
    }
    let u = index as f64 / (count as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let span = y_max - y_min;
    if span <= 0.0 {
        return height / 2;
    }
    let u = ((y - y_min) / span).clamp(0.0, 1.0);
    // y_max is drawn on row 0.
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham). Only blank cells are overwritten.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
