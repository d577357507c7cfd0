//! Axis tick placement and label formatting.
//!
//! A [`LabelSet`] is built fresh from the bounds of every render pass: a
//! [`LabelFormatter`] places the ticks and turns them into the shortest text
//! that still tells adjacent ticks apart.

pub mod datetime;
pub mod layout;
pub mod numeric;
pub mod ticks;

use tracing::trace;

use crate::core::Range;
use crate::error::{PlotError, PlotResult};

pub use datetime::{DatetimeLabelFormatter, datetime_ticks, epoch_to_datetime, format_datetime};
pub use numeric::{NumericLabelFormatter, shortest_labels};
pub use ticks::{evenly_spaced_ticks, nice_ticks};

/// Strategy turning a range into ticks and ticks into label text.
pub trait LabelFormatter {
    /// Chooses roughly `target_count` tick positions inside `range`.
    fn place_ticks(&self, range: Range, target_count: usize) -> PlotResult<Vec<f64>> {
        nice_ticks(range, target_count)
    }

    /// Formats `ticks`, returning exactly one label per tick in tick order.
    fn format_labels(&self, ticks: &[f64], range: Range) -> PlotResult<Vec<String>>;
}

/// Ticks of one axis paired with their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    range: Range,
    ticks: Vec<f64>,
    labels: Vec<String>,
}

impl LabelSet {
    pub fn build(
        range: Range,
        target_count: usize,
        formatter: &dyn LabelFormatter,
    ) -> PlotResult<Self> {
        let ticks = formatter.place_ticks(range, target_count)?;
        Self::from_ticks(range, ticks, formatter)
    }

    /// Labels caller-chosen ticks.
    pub fn from_ticks(
        range: Range,
        ticks: Vec<f64>,
        formatter: &dyn LabelFormatter,
    ) -> PlotResult<Self> {
        let labels = formatter.format_labels(&ticks, range)?;
        if labels.len() != ticks.len() {
            return Err(PlotError::InvalidData(format!(
                "label formatter returned {} labels for {} ticks",
                labels.len(),
                ticks.len()
            )));
        }
        trace!(
            min = range.min,
            max = range.max,
            tick_count = ticks.len(),
            "built label set"
        );
        Ok(Self {
            range,
            ticks,
            labels,
        })
    }

    pub fn numeric(range: Range, target_count: usize) -> PlotResult<Self> {
        Self::build(range, target_count, &NumericLabelFormatter::new())
    }

    pub fn datetime(range: Range, target_count: usize) -> PlotResult<Self> {
        Self::build(range, target_count, &DatetimeLabelFormatter::new())
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.ticks
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }

    #[must_use]
    pub fn max_label_width(&self) -> usize {
        self.labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// See [`layout::horizontal_line`].
    #[must_use]
    pub fn render_horizontal(&self, width: u32) -> String {
        layout::horizontal_line(self, width)
    }

    /// See [`layout::vertical_column`].
    #[must_use]
    pub fn render_vertical(&self, height: u32) -> Vec<String> {
        layout::vertical_column(self, height)
    }
}
