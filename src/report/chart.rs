//! Terminal line chart of recent rounds

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Default chart height in rows
pub const CHART_HEIGHT: usize = 8;

/// Render values as a point chart with a dashed row at `target`
///
/// One column per round, oldest on the left. The y axis spans the values and
/// the target, so the reference row is always visible.
pub fn render(values: &[Decimal], target: Decimal, height: usize) -> String {
    if values.is_empty() || height < 2 {
        return String::new();
    }

    let points: Vec<f64> = values.iter().map(|v| v.to_f64().unwrap_or(0.0)).collect();
    let target = target.to_f64().unwrap_or(0.0);

    let lo = points.iter().copied().fold(target, f64::min);
    let hi = points.iter().copied().fold(target, f64::max);
    let span = if hi > lo { hi - lo } else { 1.0 };
    let steps = (height - 1) as f64;
    let row_of = |v: f64| (((hi - v) / span) * steps).round() as usize;
    let target_row = row_of(target);

    let mut out = String::new();
    for row in 0..height {
        let level = hi - span * row as f64 / steps;
        let _ = write!(out, "{:>7.2} |", level);
        for p in &points {
            let cell = if row_of(*p) == row {
                'o'
            } else if row == target_row {
                '-'
            } else {
                ' '
            };
            out.push(' ');
            out.push(cell);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{:>7} +{}", "", "--".repeat(points.len()));

    out
}
