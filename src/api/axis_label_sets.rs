use crate::axis_labels::{DatetimeLabelFormatter, LabelSet, NumericLabelFormatter};
use crate::error::PlotResult;

use super::ViewportState;

const MIN_LABEL_TARGET: u32 = 2;
const MAX_LABEL_TARGET: u32 = 10;
const X_CELLS_PER_LABEL: u32 = 10;
const Y_CELLS_PER_LABEL: u32 = 4;

impl ViewportState {
    /// Labels for the current x bounds.
    pub fn x_label_set(&self) -> PlotResult<LabelSet> {
        let options = &self.options;
        let target = x_label_target(options.width);
        if options.x_as_datetime {
            return LabelSet::build(self.x_range(), target, &DatetimeLabelFormatter::new());
        }
        let formatter = NumericLabelFormatter::new()
            .with_unit(options.x_unit.clone())
            .with_log10(options.x_as_log);
        LabelSet::build(self.x_range(), target, &formatter)
    }

    /// Labels for the current y bounds.
    pub fn y_label_set(&self) -> PlotResult<LabelSet> {
        let options = &self.options;
        let formatter = NumericLabelFormatter::new()
            .with_unit(options.y_unit.clone())
            .with_log10(options.y_as_log);
        LabelSet::build(self.y_range(), y_label_target(options.height), &formatter)
    }
}

/// Desired x tick count for a grid `width` cells wide.
#[must_use]
pub fn x_label_target(width: u32) -> usize {
    (width / X_CELLS_PER_LABEL).clamp(MIN_LABEL_TARGET, MAX_LABEL_TARGET) as usize
}

/// Desired y tick count for a grid `height` lines tall.
#[must_use]
pub fn y_label_target(height: u32) -> usize {
    (height / Y_CELLS_PER_LABEL).clamp(MIN_LABEL_TARGET, MAX_LABEL_TARGET) as usize
}

#[cfg(test)]
mod tests {
    use super::{x_label_target, y_label_target};

    #[test]
    fn label_targets_scale_with_the_grid_and_stay_bounded() {
        assert_eq!(x_label_target(60), 6);
        assert_eq!(x_label_target(5), 2);
        assert_eq!(x_label_target(400), 10);
        assert_eq!(y_label_target(17), 4);
        assert_eq!(y_label_target(1), 2);
    }
}
