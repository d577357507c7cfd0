use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Fraction of the current span moved by one pan or zoom step.
pub const VIEW_STEP_RATIO: f64 = 0.1;

/// Closed interval `[min, max]` on one axis.
///
/// `min <= max` is assumed by callers but never enforced: zoom and pan keep
/// whatever ordering they are given, and zero-width spans are legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.min > self.max
    }

    /// Returns the same interval with `min <= max`.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_inverted() {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }

    pub fn ensure_finite(self, axis: &str) -> PlotResult<Self> {
        if !self.is_finite() {
            return Err(PlotError::InvalidData(format!(
                "{axis} range must be finite (min={}, max={})",
                self.min, self.max
            )));
        }
        Ok(self)
    }

    /// Inclusive membership test on the normalized interval.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let range = self.normalized();
        value >= range.min && value <= range.max
    }

    /// Position of `value` relative to the interval, `0.0` at `min` and `1.0`
    /// at `max`. `None` for zero or non-finite spans.
    #[must_use]
    pub fn fraction_of(self, value: f64) -> Option<f64> {
        let span = self.span();
        if !span.is_finite() || span == 0.0 || !value.is_finite() {
            return None;
        }
        Some((value - self.min) / span)
    }

    /// Translates the interval by `VIEW_STEP_RATIO * factor * span`.
    #[must_use]
    pub fn shifted(self, factor: f64) -> Self {
        let step = VIEW_STEP_RATIO * factor * self.span();
        Self::new(self.min + step, self.max + step)
    }

    /// Contracts both ends inwards by `VIEW_STEP_RATIO * span`.
    #[must_use]
    pub fn zoomed_in(self) -> Self {
        let step = VIEW_STEP_RATIO * self.span();
        Self::new(self.min + step, self.max - step)
    }

    /// Expands both ends outwards by `VIEW_STEP_RATIO * span`.
    ///
    /// Not the inverse of [`Self::zoomed_in`]: the step is taken from the
    /// current span, so `[0, 100]` zoomed in then out ends at `[2, 98]`.
    #[must_use]
    pub fn zoomed_out(self) -> Self {
        let step = VIEW_STEP_RATIO * self.span();
        Self::new(self.min - step, self.max + step)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Range;

    #[test]
    fn shift_moves_by_a_tenth_of_the_span() {
        assert_eq!(Range::new(0.0, 100.0).shifted(1.0), Range::new(10.0, 110.0));
        assert_eq!(Range::new(0.0, 100.0).shifted(-1.0), Range::new(-10.0, 90.0));
    }

    #[test]
    fn zoom_steps_are_a_tenth_of_the_current_span() {
        let range = Range::new(0.0, 100.0);
        assert_eq!(range.zoomed_in(), Range::new(10.0, 90.0));
        assert_eq!(range.zoomed_out(), Range::new(-10.0, 110.0));

        let round_trip = range.zoomed_in().zoomed_out();
        assert!((round_trip.min - 2.0).abs() <= 1e-9);
        assert!((round_trip.max - 98.0).abs() <= 1e-9);
    }

    #[test]
    fn zero_span_is_stable_under_pan_and_zoom() {
        let range = Range::new(5.0, 5.0);
        assert_eq!(range.shifted(1.0), range);
        assert_eq!(range.zoomed_in(), range);
        assert_eq!(range.zoomed_out(), range);
        assert_eq!(range.fraction_of(5.0), None);
    }

    #[test]
    fn inverted_range_stays_inverted_without_clamping() {
        let range = Range::new(10.0, 0.0);
        let zoomed = range.zoomed_in();
        assert!(zoomed.is_inverted());
        assert_eq!(zoomed, Range::new(9.0, 1.0));
        assert_eq!(range.normalized(), Range::new(0.0, 10.0));
    }
}
