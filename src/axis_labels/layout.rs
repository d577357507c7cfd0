//! Placement of tick labels on the character grid.
//!
//! Labels that would collide with an already placed label are dropped, never
//! shifted onto another tick's cell.

use super::LabelSet;

/// Minimum number of blank cells between two labels on one line.
const HORIZONTAL_GAP: usize = 1;

/// Renders `labels` into one line of exactly `width` characters.
///
/// Each label is centered on its tick's column and clamped inside the line.
#[must_use]
pub fn horizontal_line(labels: &LabelSet, width: u32) -> String {
    let width = width as usize;
    let mut line = vec![' '; width];
    let mut next_free = 0;

    for (tick, label) in labels.iter() {
        let Some(fraction) = tick_fraction(labels, tick) else {
            continue;
        };
        let text: Vec<char> = label.chars().collect();
        if text.is_empty() || text.len() > width {
            continue;
        }

        let column = (fraction * (width - 1) as f64).round() as usize;
        let start = column.saturating_sub(text.len() / 2).min(width - text.len());
        if start < next_free {
            continue;
        }
        line[start..start + text.len()].copy_from_slice(&text);
        next_free = start + text.len() + HORIZONTAL_GAP;
    }

    line.into_iter().collect()
}

/// Renders `labels` into `height` rows, top row first, right-aligned to the
/// widest placed label.
#[must_use]
pub fn vertical_column(labels: &LabelSet, height: u32) -> Vec<String> {
    let height = height as usize;
    let mut rows: Vec<Option<&str>> = vec![None; height];
    if height == 0 {
        return Vec::new();
    }

    for (tick, label) in labels.iter() {
        let Some(fraction) = tick_fraction(labels, tick) else {
            continue;
        };
        let row = ((1.0 - fraction) * (height - 1) as f64).round() as usize;
        if rows[row].is_none() {
            rows[row] = Some(label);
        }
    }

    let column_width = rows
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    rows.into_iter()
        .map(|label| format!("{:>column_width$}", label.unwrap_or("")))
        .collect()
}

/// Fraction along the axis, centered for zero-span ranges and `None` when the
/// tick lies outside the range.
fn tick_fraction(labels: &LabelSet, tick: f64) -> Option<f64> {
    let range = labels.range();
    if range.span() == 0.0 {
        return (tick == range.min).then_some(0.5);
    }
    range
        .fraction_of(tick)
        .filter(|fraction| (0.0..=1.0).contains(fraction))
}
