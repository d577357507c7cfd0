use serde::{Deserialize, Serialize};

use crate::core::{GridSize, Range, ViewBounds};
use crate::error::{PlotError, PlotResult};

/// Configuration of one plotting session.
///
/// Serializable so hosts can persist a view and restore it later. The bounds
/// and width stored here are the *current* view; [`super::ViewportState`]
/// keeps its own snapshot of the values it was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    #[serde(default)]
    pub color: bool,
    /// Restrict glyphs to ASCII.
    #[serde(default)]
    pub force_ascii: bool,
    /// Plotting region height, in lines.
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub legend_labels: Option<Vec<String>>,
    /// Whether to join consecutive points, per series.
    #[serde(default = "default_lines")]
    pub lines: Vec<bool>,
    /// Hard limit on characters per output line; may override `width`.
    #[serde(default)]
    pub line_length_hard_cap: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    /// Plotting region width, in characters.
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default)]
    pub x_as_log: bool,
    /// Interpret x values as epoch seconds.
    #[serde(default)]
    pub x_as_datetime: bool,
    #[serde(default = "default_gridlines")]
    pub x_gridlines: Vec<f64>,
    #[serde(default = "default_max")]
    pub x_max: f64,
    #[serde(default)]
    pub x_min: f64,
    #[serde(default)]
    pub x_unit: String,
    #[serde(default)]
    pub y_as_log: bool,
    #[serde(default = "default_gridlines")]
    pub y_gridlines: Vec<f64>,
    #[serde(default = "default_max")]
    pub y_max: f64,
    #[serde(default)]
    pub y_min: f64,
    #[serde(default)]
    pub y_unit: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            color: false,
            force_ascii: false,
            height: default_height(),
            interactive: false,
            legend_labels: None,
            lines: default_lines(),
            line_length_hard_cap: None,
            title: None,
            width: default_width(),
            x_as_log: false,
            x_as_datetime: false,
            x_gridlines: default_gridlines(),
            x_max: default_max(),
            x_min: 0.0,
            x_unit: String::new(),
            y_as_log: false,
            y_gridlines: default_gridlines(),
            y_max: default_max(),
            y_min: 0.0,
            y_unit: String::new(),
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_bounds(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    #[must_use]
    pub fn with_y_bounds(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_grid_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_units(mut self, x_unit: impl Into<String>, y_unit: impl Into<String>) -> Self {
        self.x_unit = x_unit.into();
        self.y_unit = y_unit.into();
        self
    }

    #[must_use]
    pub fn with_log_axes(mut self, x_as_log: bool, y_as_log: bool) -> Self {
        self.x_as_log = x_as_log;
        self.y_as_log = y_as_log;
        self
    }

    #[must_use]
    pub fn with_x_as_datetime(mut self, x_as_datetime: bool) -> Self {
        self.x_as_datetime = x_as_datetime;
        self
    }

    #[must_use]
    pub fn with_gridlines(mut self, x_gridlines: Vec<f64>, y_gridlines: Vec<f64>) -> Self {
        self.x_gridlines = x_gridlines;
        self.y_gridlines = y_gridlines;
        self
    }

    #[must_use]
    pub fn with_lines(mut self, lines: Vec<bool>) -> Self {
        self.lines = lines;
        self
    }

    #[must_use]
    pub fn with_legend_labels(mut self, legend_labels: Vec<String>) -> Self {
        self.legend_labels = Some(legend_labels);
        self
    }

    #[must_use]
    pub fn with_line_length_hard_cap(mut self, cap: Option<u32>) -> Self {
        self.line_length_hard_cap = cap;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_force_ascii(mut self, force_ascii: bool) -> Self {
        self.force_ascii = force_ascii;
        self
    }

    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn x_range(&self) -> Range {
        Range::new(self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(&self) -> Range {
        Range::new(self.y_min, self.y_max)
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        ViewBounds {
            x: self.x_range(),
            y: self.y_range(),
        }
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// Checks every option a session cannot start from.
    pub fn validate(&self) -> PlotResult<()> {
        if !self.grid_size().is_valid() {
            return Err(PlotError::InvalidGridSize {
                width: self.width,
                height: self.height,
            });
        }
        self.x_range().ensure_finite("x")?;
        self.y_range().ensure_finite("y")?;
        if self.x_as_log && self.x_as_datetime {
            return Err(PlotError::InvalidData(
                "x axis cannot be both logarithmic and datetime".to_owned(),
            ));
        }
        if self.line_length_hard_cap == Some(0) {
            return Err(PlotError::InvalidData(
                "line_length_hard_cap must be > 0".to_owned(),
            ));
        }
        if self.lines.is_empty() {
            return Err(PlotError::InvalidData(
                "lines must hold at least one entry".to_owned(),
            ));
        }
        let gridlines_finite = self
            .x_gridlines
            .iter()
            .chain(&self.y_gridlines)
            .all(|value| value.is_finite());
        if !gridlines_finite {
            return Err(PlotError::InvalidData(
                "gridlines must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes options to pretty JSON.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse options: {e}")))
    }
}

fn default_height() -> u32 {
    17
}

fn default_width() -> u32 {
    60
}

fn default_max() -> f64 {
    1.0
}

fn default_gridlines() -> Vec<f64> {
    vec![0.0]
}

fn default_lines() -> Vec<bool> {
    vec![false]
}
