use tracing::debug;

use crate::core::{GridSize, Range, ViewBounds};
use crate::error::{PlotError, PlotResult};
use crate::extensions::WidgetDispatcher;

use super::PlotOptions;

/// Mutable view of one plotting session.
///
/// Owns the options (whose bounds and width are the current view) and the
/// registered widgets. The bounds and width passed at construction are kept
/// in separate fields that nothing mutates afterwards.
#[derive(Debug)]
pub struct ViewportState {
    pub(super) options: PlotOptions,
    initial_bounds: ViewBounds,
    initial_width: u32,
    pub(super) widgets: WidgetDispatcher,
}

impl ViewportState {
    /// Fails with [`PlotError::InvalidGridSize`] on a zero width or height and
    /// with [`PlotError::InvalidData`] on non-finite bounds or bad options.
    pub fn new(options: PlotOptions) -> PlotResult<Self> {
        options.validate()?;
        let initial_bounds = options.bounds();
        let initial_width = options.width;
        debug!(
            x_min = initial_bounds.x.min,
            x_max = initial_bounds.x.max,
            y_min = initial_bounds.y.min,
            y_max = initial_bounds.y.max,
            width = options.width,
            height = options.height,
            "create viewport state"
        );
        Ok(Self {
            options,
            initial_bounds,
            initial_width,
            widgets: WidgetDispatcher::new(),
        })
    }

    #[must_use]
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    #[must_use]
    pub fn into_options(self) -> PlotOptions {
        self.options
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.options.bounds()
    }

    #[must_use]
    pub fn x_range(&self) -> Range {
        self.options.x_range()
    }

    #[must_use]
    pub fn y_range(&self) -> Range {
        self.options.y_range()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.options.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.options.height
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.options.grid_size()
    }

    /// Bounds captured at construction.
    #[must_use]
    pub fn initial_bounds(&self) -> ViewBounds {
        self.initial_bounds
    }

    /// Width captured at construction.
    #[must_use]
    pub fn initial_width(&self) -> u32 {
        self.initial_width
    }

    #[must_use]
    pub fn widgets(&self) -> &WidgetDispatcher {
        &self.widgets
    }

    /// Replaces the x bounds. Ordering is not enforced.
    pub fn set_x_range(&mut self, range: Range) -> PlotResult<()> {
        let range = range.ensure_finite("x")?;
        self.write_bounds(ViewBounds {
            x: range,
            y: self.y_range(),
        });
        debug!(x_min = range.min, x_max = range.max, "set x range");
        Ok(())
    }

    /// Replaces the y bounds. Ordering is not enforced.
    pub fn set_y_range(&mut self, range: Range) -> PlotResult<()> {
        let range = range.ensure_finite("y")?;
        self.write_bounds(ViewBounds {
            x: self.x_range(),
            y: range,
        });
        debug!(y_min = range.min, y_max = range.max, "set y range");
        Ok(())
    }

    /// Changes the grid width. Zero is rejected.
    pub fn set_width(&mut self, width: u32) -> PlotResult<()> {
        if width == 0 {
            return Err(PlotError::InvalidGridSize {
                width,
                height: self.options.height,
            });
        }
        debug!(from = self.options.width, to = width, "set grid width");
        self.options.width = width;
        Ok(())
    }

    pub(super) fn write_bounds(&mut self, bounds: ViewBounds) {
        self.options.x_min = bounds.x.min;
        self.options.x_max = bounds.x.max;
        self.options.y_min = bounds.y.min;
        self.options.y_max = bounds.y.max;
    }
}
