use crate::api::ViewportState;
use crate::interaction::ViewCommand;

use super::widgets::{KeyMap, Overlay, Widget};

pub const NAVIGATION_WIDGET_ID: &str = "navigation";

/// Pan, zoom and reset on the usual terminal keys.
///
/// | keys          | command        |
/// |---------------|----------------|
/// | `h`, `left`   | shift left     |
/// | `l`, `right`  | shift right    |
/// | `k`, `up`     | shift up       |
/// | `j`, `down`   | shift down     |
/// | `u`, `+`      | zoom in        |
/// | `n`, `-`      | zoom out       |
/// | `r`           | reset view     |
/// | `w`           | reset width    |
#[derive(Debug, Clone)]
pub struct NavigationWidget {
    keymap: KeyMap,
}

impl NavigationWidget {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keymap: default_navigation_keymap(),
        }
    }

    /// Replaces the default bindings.
    #[must_use]
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Adds or rebinds one key.
    #[must_use]
    pub fn with_binding(mut self, key: impl Into<String>, command: ViewCommand) -> Self {
        self.keymap.insert(key, command);
        self
    }
}

impl Default for NavigationWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for NavigationWidget {
    fn id(&self) -> &str {
        NAVIGATION_WIDGET_ID
    }

    fn draw(&self, _state: &ViewportState) -> Overlay {
        Overlay::None
    }

    fn keymap(&self) -> KeyMap {
        self.keymap.clone()
    }
}

#[must_use]
pub fn default_navigation_keymap() -> KeyMap {
    KeyMap::new()
        .bind("h", ViewCommand::ShiftLeft)
        .bind("left", ViewCommand::ShiftLeft)
        .bind("l", ViewCommand::ShiftRight)
        .bind("right", ViewCommand::ShiftRight)
        .bind("k", ViewCommand::ShiftUp)
        .bind("up", ViewCommand::ShiftUp)
        .bind("j", ViewCommand::ShiftDown)
        .bind("down", ViewCommand::ShiftDown)
        .bind("u", ViewCommand::ZoomIn)
        .bind("+", ViewCommand::ZoomIn)
        .bind("n", ViewCommand::ZoomOut)
        .bind("-", ViewCommand::ZoomOut)
        .bind("r", ViewCommand::ResetView)
        .bind("w", ViewCommand::ResetWidth)
}
