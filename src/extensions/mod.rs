//! Key-bound widgets and their registry.
//!
//! Widgets never hold the viewport: they receive it by reference to draw and
//! by mutable reference when one of their key actions fires.

pub mod dispatcher;
pub mod level;
pub mod navigation;
pub mod widgets;

pub use dispatcher::WidgetDispatcher;
pub use level::LevelWidget;
pub use navigation::{NAVIGATION_WIDGET_ID, NavigationWidget, default_navigation_keymap};
pub use widgets::{KeyMap, NO_INTERACTION, Overlay, Widget, WidgetAction, WidgetActionFn};
