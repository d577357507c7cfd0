//! termplot: axis labels and interactive view state for terminal plots.
//!
//! The crate computes what the axes of a character-grid plot should say and
//! how the visible data rectangle evolves under key presses. Turning data
//! points into glyphs and drawing the terminal are left to the host.

pub mod api;
pub mod axis_labels;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{PlotOptions, ViewportState};
pub use axis_labels::{
    DatetimeLabelFormatter, LabelFormatter, LabelSet, NumericLabelFormatter,
};
pub use crate::core::{GridSize, PrecisionUnit, Range, ViewBounds};
pub use error::{PlotError, PlotResult};
pub use extensions::{
    KeyMap, LevelWidget, NO_INTERACTION, NavigationWidget, Overlay, Widget, WidgetAction,
    WidgetDispatcher,
};
pub use interaction::ViewCommand;
