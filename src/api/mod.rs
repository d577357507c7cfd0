//! Session-level API: options plus the mutable viewport that widgets drive.

mod axis_label_sets;
mod plot_options;
mod view_navigation;
mod viewport_state;
mod widget_dispatch;

pub use axis_label_sets::{x_label_target, y_label_target};
pub use plot_options::PlotOptions;
pub use viewport_state::ViewportState;
