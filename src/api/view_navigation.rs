use tracing::debug;

use crate::core::ViewBounds;
use crate::interaction::ViewCommand;

use super::ViewportState;

impl ViewportState {
    pub fn shift_left(&mut self) {
        self.apply(ViewCommand::ShiftLeft);
    }

    pub fn shift_right(&mut self) {
        self.apply(ViewCommand::ShiftRight);
    }

    pub fn shift_up(&mut self) {
        self.apply(ViewCommand::ShiftUp);
    }

    pub fn shift_down(&mut self) {
        self.apply(ViewCommand::ShiftDown);
    }

    /// Contracts both axes by a tenth of their span on each side.
    pub fn zoom_in(&mut self) {
        self.apply(ViewCommand::ZoomIn);
    }

    /// Expands both axes by a tenth of their span on each side.
    pub fn zoom_out(&mut self) {
        self.apply(ViewCommand::ZoomOut);
    }

    /// Restores the bounds captured at construction, bit for bit.
    pub fn reset_view(&mut self) {
        self.apply(ViewCommand::ResetView);
    }

    pub fn reset_width(&mut self) {
        self.apply(ViewCommand::ResetWidth);
    }

    /// Runs one view command. Pan and zoom never clamp, so ranges may reach
    /// zero span or invert.
    pub fn apply(&mut self, command: ViewCommand) {
        let current = self.bounds();
        let next = match command {
            ViewCommand::ShiftLeft => ViewBounds {
                x: current.x.shifted(-1.0),
                ..current
            },
            ViewCommand::ShiftRight => ViewBounds {
                x: current.x.shifted(1.0),
                ..current
            },
            ViewCommand::ShiftUp => ViewBounds {
                y: current.y.shifted(1.0),
                ..current
            },
            ViewCommand::ShiftDown => ViewBounds {
                y: current.y.shifted(-1.0),
                ..current
            },
            ViewCommand::ZoomIn => ViewBounds {
                x: current.x.zoomed_in(),
                y: current.y.zoomed_in(),
            },
            ViewCommand::ZoomOut => ViewBounds {
                x: current.x.zoomed_out(),
                y: current.y.zoomed_out(),
            },
            ViewCommand::ResetView => self.initial_bounds(),
            ViewCommand::ResetWidth => {
                let width = self.initial_width();
                debug!(from = self.options.width, to = width, "reset grid width");
                self.options.width = width;
                return;
            }
        };
        self.write_bounds(next);
        debug!(
            command = command.name(),
            x_min = next.x.min,
            x_max = next.x.max,
            y_min = next.y.min,
            y_max = next.y.max,
            "apply view command"
        );
    }
}
