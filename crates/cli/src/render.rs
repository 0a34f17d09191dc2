//! Plain-text rendering of a dashboard snapshot.
//!
//! These helpers return strings without color so they can be tested;
//! `main` adds the styling.

use pipeline::{FilteredView, Metrics, RegionSales};

const BAR: char = '█';

/// Render the view as an aligned three-column table.
pub fn render_table(view: &FilteredView) -> Vec<String> {
    if view.is_empty() {
        return vec!["(no matching records)".to_string()];
    }

    let sales: Vec<String> = view.iter().map(|r| r.sales.to_string()).collect();
    let region_w = view.iter().map(|r| r.region.chars().count()).max().unwrap_or(0).max(6);
    let sales_w = sales.iter().map(String::len).max().unwrap_or(0).max(5);
    let rep_w = view.iter().map(|r| r.rep.chars().count()).max().unwrap_or(0).max(3);

    let mut lines = Vec::with_capacity(view.len() + 2);
    lines.push(
        format!("{:<region_w$}  {:>sales_w$}  {:<rep_w$}", "region", "sales", "rep")
            .trim_end()
            .to_string(),
    );
    lines.push(format!(
        "{}  {}  {}",
        "-".repeat(region_w),
        "-".repeat(sales_w),
        "-".repeat(rep_w)
    ));
    for (record, sales) in view.iter().zip(&sales) {
        lines.push(
            format!("{:<region_w$}  {:>sales_w$}  {:<rep_w$}", record.region, sales, record.rep)
                .trim_end()
                .to_string(),
        );
    }
    lines
}

/// Length of a bar for `sales` when `max` maps to `width` characters.
///
/// Any non-zero value gets at least one character.
pub fn bar_length(sales: u64, max: u64, width: usize) -> usize {
    if sales == 0 || max == 0 {
        return 0;
    }
    let scaled = (sales as f64 / max as f64 * width as f64).round() as usize;
    scaled.clamp(1, width.max(1))
}

/// Render a horizontal bar chart, one line per region.
pub fn render_chart(chart: &[RegionSales], width: usize) -> Vec<String> {
    if chart.is_empty() {
        return vec!["(nothing to chart)".to_string()];
    }

    let max = chart.iter().map(|bar| bar.sales).max().unwrap_or(0);
    let label_w = chart.iter().map(|bar| bar.region.chars().count()).max().unwrap_or(0);

    chart
        .iter()
        .map(|bar| {
            let bar_str: String = std::iter::repeat(BAR)
                .take(bar_length(bar.sales, max, width))
                .collect();
            format!("{:<label_w$} | {} {}", bar.region, bar_str, bar.sales)
        })
        .collect()
}

/// Render the two headline metrics.
pub fn render_metrics(metrics: &Metrics) -> Vec<String> {
    vec![
        format!("Total sales: ${}", metrics.total_sales),
        format!("Rows: {}", metrics.count),
    ]
}
