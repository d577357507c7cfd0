use smallvec::SmallVec;

use crate::core::Range;
use crate::error::{PlotError, PlotResult};

use super::LabelFormatter;
use super::ticks::tick_step_hint_from_values;

const MAX_PRECISION: usize = 12;
const STEP_SIGNIFICANT_DIGITS: usize = 6;
const SCIENTIFIC_UPPER: f64 = 1e7;
const SCIENTIFIC_LOWER: f64 = 1e-4;
const UNHINTED_RELATIVE_ERROR: f64 = 0.05;

/// Formats numeric ticks with the fewest digits that keep adjacent labels
/// apart.
///
/// On log10 axes the ticks are exponents and the labels show `10^tick`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericLabelFormatter {
    unit: String,
    log10: bool,
}

impl NumericLabelFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `unit` verbatim to every label.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_log10(mut self, log10: bool) -> Self {
        self.log10 = log10;
        self
    }
}

impl LabelFormatter for NumericLabelFormatter {
    fn format_labels(&self, ticks: &[f64], _range: Range) -> PlotResult<Vec<String>> {
        if let Some(bad) = ticks.iter().find(|tick| !tick.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "tick values must be finite, got {bad}"
            )));
        }

        let mut labels = if self.log10 {
            let values: SmallVec<[f64; 16]> =
                ticks.iter().map(|tick| 10f64.powf(*tick)).collect();
            shortest_labels(&values, None)
        } else {
            shortest_labels(ticks, Some(tick_step_hint_from_values(ticks)))
        };

        if !self.unit.is_empty() {
            for label in &mut labels {
                label.push_str(&self.unit);
            }
        }
        Ok(labels)
    }
}

/// Shortest labels for `values` that keep every adjacent pair distinct.
///
/// With a step hint, decimal precision starts from the step's own precision
/// and trailing zeros are kept so labels line up. Without one, precision starts
/// at zero, trailing zeros are trimmed and every label must also stay within
/// `UNHINTED_RELATIVE_ERROR` of its value.
#[must_use]
pub fn shortest_labels(values: &[f64], step_hint: Option<f64>) -> Vec<String> {
    if values.is_empty() {
        return Vec::new();
    }

    let max_abs = values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
    let scientific = max_abs >= SCIENTIFIC_UPPER || (max_abs > 0.0 && max_abs < SCIENTIFIC_LOWER);

    let step_hint = step_hint.filter(|step| step.is_finite() && *step > 0.0);
    let start = match (scientific, step_hint) {
        (false, Some(step)) => precision_from_step(step),
        _ => 0,
    };
    let trim = step_hint.is_none();

    let mut labels = Vec::new();
    for precision in start..=MAX_PRECISION {
        labels = values
            .iter()
            .map(|value| format_value(*value, precision, scientific, trim))
            .collect();
        if adjacent_labels_distinct(&labels, values)
            && (!trim || labels_within_relative_error(&labels, values))
        {
            break;
        }
    }
    labels
}

fn format_value(value: f64, precision: usize, scientific: bool, trim: bool) -> String {
    let text = if scientific {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    };
    let text = if trim && !scientific {
        trim_decimal(text)
    } else {
        text
    };
    normalize_negative_zero(text)
}

fn adjacent_labels_distinct(labels: &[String], values: &[f64]) -> bool {
    labels
        .windows(2)
        .zip(values.windows(2))
        .all(|(label_pair, value_pair)| {
            value_pair[0] == value_pair[1] || label_pair[0] != label_pair[1]
        })
}

fn labels_within_relative_error(labels: &[String], values: &[f64]) -> bool {
    labels.iter().zip(values).all(|(label, value)| {
        if *value == 0.0 {
            return true;
        }
        label
            .parse::<f64>()
            .is_ok_and(|parsed| ((parsed - value) / value).abs() <= UNHINTED_RELATIVE_ERROR)
    })
}

/// Decimals needed to print `step` exactly, reading it at
/// `STEP_SIGNIFICANT_DIGITS` so float noise from tick arithmetic is ignored.
fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let text = format!("{:.*e}", STEP_SIGNIFICANT_DIGITS - 1, step);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return 0;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return 0;
    };
    let mantissa_decimals = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.trim_end_matches('0').len());
    let decimals = mantissa_decimals as i64 - exponent;
    decimals.clamp(0, MAX_PRECISION as i64) as usize
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    text
}

fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if text.parse::<f64>() == Ok(0.0) => rest.to_owned(),
        _ => text,
    }
}
